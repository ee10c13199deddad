use super::*;

fn parse_args(argv: &[&str]) -> Args {
    Args::try_parse_from(argv)
        .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
}

#[test]
fn bare_invocation_defaults_to_chat() {
    let args = parse_args(&["maquette"]);
    assert!(args.command.is_none());
    assert!(args.debug_log.is_none());
}

#[test]
fn chat_subcommand_parses_explicitly() {
    let args = parse_args(&["maquette", "chat"]);
    assert!(matches!(args.command, Some(Commands::Chat)));
}

#[test]
fn themes_subcommand_parses() {
    let args = parse_args(&["maquette", "themes"]);
    assert!(matches!(args.command, Some(Commands::Themes)));
}

#[test]
fn debug_log_flag_takes_a_path() {
    let args = parse_args(&["maquette", "--debug-log", "/tmp/maquette.log"]);
    assert_eq!(
        args.debug_log.as_deref(),
        Some(std::path::Path::new("/tmp/maquette.log"))
    );
}

#[test]
fn debug_log_flag_is_global() {
    let args = parse_args(&["maquette", "chat", "-d", "trace.log"]);
    assert!(matches!(args.command, Some(Commands::Chat)));
    assert_eq!(args.debug_log.as_deref(), Some(std::path::Path::new("trace.log")));
}

#[test]
fn unknown_subcommands_are_rejected() {
    assert!(Args::try_parse_from(["maquette", "auth"]).is_err());
}
