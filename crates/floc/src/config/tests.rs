use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn no_arguments_is_help() {
    assert_eq!(parse_command(&[], None), Ok(Command::Help));
    assert_eq!(parse_command(&args(&["--help"]), None), Ok(Command::Help));
}

#[test]
fn table_depth() {
    assert_eq!(
        parse_command(&args(&["table"]), None),
        Ok(Command::Table { depth: None })
    );
    assert_eq!(
        parse_command(&args(&["table", "--depth=3"]), None),
        Ok(Command::Table { depth: Some(3) })
    );
}

#[test]
fn depth_outside_ceiling_is_rejected() {
    assert_eq!(
        parse_command(&args(&["table", "--depth=5"]), None),
        Err(ConfigError::InvalidDepth("5".to_string()))
    );
    assert_eq!(
        parse_command(&args(&["table", "--depth=-1"]), None),
        Err(ConfigError::InvalidDepth("-1".to_string()))
    );
}

#[test]
fn probe_defaults_to_environment() {
    assert_eq!(
        parse_command(&args(&["inspect"]), None),
        Ok(Command::Inspect {
            probe: ProbeChoice::None
        })
    );
    assert_eq!(
        parse_command(&args(&["inspect"]), Some("system")),
        Ok(Command::Inspect {
            probe: ProbeChoice::System
        })
    );
    assert_eq!(
        parse_command(&args(&["inspect", "--probe=none"]), Some("system")),
        Ok(Command::Inspect {
            probe: ProbeChoice::None
        })
    );
}

#[test]
fn explicit_probe_ignores_bad_environment() {
    assert_eq!(
        parse_command(&args(&["inspect", "--probe=none"]), Some("bogus")),
        Ok(Command::Inspect {
            probe: ProbeChoice::None
        })
    );
    assert_eq!(
        parse_command(&args(&["inspect", "--probe=system"]), Some("")),
        Ok(Command::Inspect {
            probe: ProbeChoice::System
        })
    );
}

#[test]
fn bad_probe_names_are_errors() {
    assert_eq!(
        parse_command(&args(&["inspect", "--probe=jemalloc"]), None),
        Err(ConfigError::UnknownProbe("jemalloc".to_string()))
    );
    assert_eq!(
        parse_command(&args(&["inspect"]), Some("bogus")),
        Err(ConfigError::UnknownProbe("bogus".to_string()))
    );
}

#[test]
fn unknown_input_is_reported() {
    assert_eq!(
        parse_command(&args(&["dump"]), None),
        Err(ConfigError::UnknownCommand("dump".to_string()))
    );
    let err = parse_command(&args(&["table", "--verbose"]), None);
    assert_eq!(
        err,
        Err(ConfigError::UnknownOption {
            command: "table",
            option: "--verbose".to_string()
        })
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        ConfigError::InvalidDepth("9".to_string()).to_string(),
        "invalid depth '9', expected 0 to 4"
    );
    assert_eq!(ProbeChoice::System.to_string(), "system");
}
