/// What `version` prints, stamped by `build.rs`. Fields missing at compile
/// time read as `unknown`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

macro_rules! stamped {
    ($key:literal) => {
        match option_env!(concat!("SPENDCAT_BUILD_", $key)) {
            Some(value) => value,
            None => "unknown",
        }
    };
}

pub const fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: stamped!("HASH"),
        git_status: stamped!("STATUS"),
        timestamp: stamped!("TIMESTAMP"),
        target: stamped!("TARGET"),
        profile: stamped!("PROFILE"),
        rustc: stamped!("RUSTC"),
    }
}

impl BuildMetadata {
    /// Lines printed by the console `version` command.
    pub fn report(&self) -> [String; 5] {
        [
            format!("spendcat {}", self.version),
            format!("commit: {} ({})", self.git_hash, self.git_status),
            format!("built: {} [{}]", self.timestamp, self.profile),
            format!("target: {}", self.target),
            format!("rustc: {}", self.rustc),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_leads_with_package_version() {
        let meta = current();
        let report = meta.report();

        assert_eq!(meta.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(report[0], format!("spendcat {}", env!("CARGO_PKG_VERSION")));
        assert!(report[1].starts_with("commit: "));
    }
}
