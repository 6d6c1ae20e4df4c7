//! Fixed prompt text for the two completion calls.

/// Instruction sent to the commentary model after the scene description.
pub const ANNOUNCER_PROMPT: &str = r#"
Please describe the action as if you were a professional play-by-play announcer, like Al Michaels or John Madden.  It should be 30 words or less.

Then, give me some commentary as if you were a color commentator that used to play the game professionally.  It should be 30 words or less.

Return it as JSON, like this:

{
"announcer": "This is a description of the action.",
"color": "This game sure is exciting!"
}
"#;

/// Build the screenshot prompt for one match. Filled in once at startup.
pub fn screenshot_prompt(map: &str, blue_team: &str, red_team: &str) -> String {
    format!(
        "
I will give you a screenshot of a Heroes of the Storm game in progress.  Please describe the action that is taking place.

The map is: {map}.

The heroes on the blue team are: {blue_team}.
The heroes on the red team are: {red_team}.
"
    )
}
