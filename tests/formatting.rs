//! Integration tests for the bot's text decoration helpers.

mod common;

use bangcmd::{Config, Decoration};

#[tokio::test]
async fn test_default_decorations() {
    let (bot, _inbox) = common::bot();
    assert_eq!(bot.bold_text("hi"), "**hi**");
    assert_eq!(bot.italic_text("hi"), "*hi*");
    assert_eq!(bot.underline_text("hi"), "__hi__");
    assert_eq!(bot.strikethrough_text("hi"), "~~hi~~");
    assert_eq!(bot.code_text("hi"), "`hi`");
}

#[tokio::test]
async fn test_format_text_nests_and_dedupes() {
    let (bot, _inbox) = common::bot();
    assert_eq!(
        bot.format_text("hi", &[Decoration::Bold, Decoration::Code]),
        "**`hi`**"
    );
    assert_eq!(
        bot.format_text("hi", &[Decoration::Italic, Decoration::Bold, Decoration::Italic]),
        "***hi***"
    );
    assert_eq!(bot.format_text("hi", &[]), "hi");
}

#[tokio::test]
async fn test_custom_formatting_flows_into_replies() -> anyhow::Result<()> {
    let mut config = Config::default();
    config.text_formatting.bold = "<b>".to_string();
    let (bot, mut inbox) = common::bot_with(config);

    assert_eq!(bot.bold_text("x"), "<b>x<b>");

    bot.handle_message(bot.client().message("!nope")).await;
    assert_eq!(
        inbox.recv().await?,
        "❌ <b>nope<b> doesn't exist.\n\n❓ Send <b>!help<b> for more info."
    );
    Ok(())
}
