/// A chat command addressed to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Embed with the player's top champions.
    Summary { region: String, name: String },
    /// Bar chart of every champion.
    Chart { region: String, name: String },
    /// Known command, but the arguments were missing.
    Usage,
}

pub fn usage(prefix: &str) -> String {
    format!(
        "Usage: `{p}mastery <region> <summoner name>` or `{p}masterychart <region> <summoner name>`",
        p = prefix
    )
}

/// Parses `{prefix}mastery <region> <name...>` style messages.
///
/// Returns `None` for anything that isn't one of our commands.
pub fn parse(content: &str, prefix: &str) -> Option<Command> {
    let rest = content.trim_start().strip_prefix(prefix)?;
    let (command, args) = match rest.split_once(char::is_whitespace) {
        Some((command, args)) => (command, args.trim()),
        None => (rest, ""),
    };

    let chart = match command.to_lowercase().as_str() {
        "mastery" => false,
        "masterychart" => true,
        _ => return None,
    };

    let Some((region, name)) = args.split_once(char::is_whitespace) else {
        return Some(Command::Usage);
    };
    let (region, name) = (region.to_string(), name.trim().to_string());

    Some(if chart {
        Command::Chart { region, name }
    } else {
        Command::Summary { region, name }
    })
}
