//! Host introspection queries (the `os` command).

use std::path::PathBuf;

use sysinfo::System;

use crate::error::EngineError;

/// Line ending convention of the host platform.
pub const HOST_EOL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// The flags accepted by the `os` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostQuery {
    Eol,
    Cpus,
    HomeDir,
    Username,
    Architecture,
}

impl HostQuery {
    /// Parse an `os` command flag. Unrecognized flags are input errors,
    /// detected before any host access.
    pub fn parse(flag: &str) -> Result<Self, EngineError> {
        match flag {
            "--EOL" => Ok(HostQuery::Eol),
            "--cpus" => Ok(HostQuery::Cpus),
            "--homedir" => Ok(HostQuery::HomeDir),
            "--username" => Ok(HostQuery::Username),
            "--architecture" => Ok(HostQuery::Architecture),
            other => Err(EngineError::Input(format!("unknown os flag: {other}"))),
        }
    }
}

/// One logical CPU as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuInfo {
    /// Model string, e.g. "Apple M2" or "Intel(R) Core(TM) i7".
    pub model: String,
    /// Clock rate in MHz.
    pub frequency_mhz: u64,
}

/// Answer to a [`HostQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostReport {
    Eol(&'static str),
    Cpus(Vec<CpuInfo>),
    HomeDir(PathBuf),
    Username(String),
    Architecture(&'static str),
}

/// Answer a host query. Read-only, touches no session state.
pub fn report(query: HostQuery) -> HostReport {
    match query {
        HostQuery::Eol => HostReport::Eol(HOST_EOL),
        HostQuery::Cpus => {
            let mut sys = System::new();
            sys.refresh_cpu_all();
            let cpus = sys
                .cpus()
                .iter()
                .map(|cpu| CpuInfo {
                    model: cpu.brand().to_string(),
                    frequency_mhz: cpu.frequency(),
                })
                .collect();
            HostReport::Cpus(cpus)
        }
        HostQuery::HomeDir => {
            HostReport::HomeDir(dirs::home_dir().unwrap_or_else(|| PathBuf::from("/")))
        }
        HostQuery::Username => HostReport::Username(whoami::username()),
        HostQuery::Architecture => HostReport::Architecture(std::env::consts::ARCH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_flags() {
        assert_eq!(HostQuery::parse("--EOL").unwrap(), HostQuery::Eol);
        assert_eq!(HostQuery::parse("--cpus").unwrap(), HostQuery::Cpus);
        assert_eq!(HostQuery::parse("--homedir").unwrap(), HostQuery::HomeDir);
        assert_eq!(HostQuery::parse("--username").unwrap(), HostQuery::Username);
        assert_eq!(
            HostQuery::parse("--architecture").unwrap(),
            HostQuery::Architecture
        );
    }

    #[test]
    fn test_parse_unknown_flag_is_input_error() {
        let result = HostQuery::parse("--memory");
        assert!(matches!(result, Err(EngineError::Input(_))));

        // Flags are case-sensitive, like the tool they mimic.
        assert!(HostQuery::parse("--eol").is_err());
    }

    #[test]
    fn test_eol_matches_platform() {
        match report(HostQuery::Eol) {
            HostReport::Eol(eol) => {
                if cfg!(windows) {
                    assert_eq!(eol, "\r\n");
                } else {
                    assert_eq!(eol, "\n");
                }
            }
            other => panic!("expected Eol report, got {:?}", other),
        }
    }

    #[test]
    fn test_cpus_reports_at_least_one() {
        match report(HostQuery::Cpus) {
            HostReport::Cpus(cpus) => assert!(!cpus.is_empty()),
            other => panic!("expected Cpus report, got {:?}", other),
        }
    }

    #[test]
    fn test_username_is_nonempty() {
        match report(HostQuery::Username) {
            HostReport::Username(name) => assert!(!name.is_empty()),
            other => panic!("expected Username report, got {:?}", other),
        }
    }

    #[test]
    fn test_architecture_is_a_known_constant() {
        match report(HostQuery::Architecture) {
            HostReport::Architecture(arch) => assert_eq!(arch, std::env::consts::ARCH),
            other => panic!("expected Architecture report, got {:?}", other),
        }
    }
}
