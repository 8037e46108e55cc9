//! Checklist execution.

use crate::error::{AiServicesError, CheckError, Result};
use crate::runtime::RuntimeValidator;
use crate::ui::UserInterface;

use super::check::{CheckKind, CHECKLIST};
use super::cpu::{check_architecture, check_cpu_generation};
use super::host::Host;
use super::os_release::check_os_release;
use super::report::{CheckOutcome, ValidationReport};
use super::requirements::Requirements;

/// Runs the bootstrap checklist against a host.
///
/// The privilege check is the only one that can stop the run. Every other
/// check runs regardless of earlier failures and lands in the report.
pub struct ValidationRunner<'a> {
    host: &'a dyn Host,
    runtime: &'a dyn RuntimeValidator,
    requirements: Requirements,
}

impl<'a> ValidationRunner<'a> {
    /// Create a runner using the default requirements.
    pub fn new(host: &'a dyn Host, runtime: &'a dyn RuntimeValidator) -> Self {
        Self {
            host,
            runtime,
            requirements: Requirements::default(),
        }
    }

    /// Validate against different requirements.
    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }

    /// Get the requirements being validated.
    pub fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    /// Run every check and collect the outcomes.
    ///
    /// A failing fatal check ends the run with [`AiServicesError::FatalCheck`]
    /// before anything else is checked. Checks that are not implemented are
    /// recorded as passed. Otherwise returns the full report, whether or not
    /// individual checks failed.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<ValidationReport> {
        tracing::info!("Running bootstrap validation...");
        ui.show_header("Running bootstrap validation...");

        let mut report = ValidationReport::new();

        for check in CHECKLIST {
            if !check.is_implemented() {
                tracing::debug!(check = check.name(), "Check not yet implemented, passing");
                report.record(CheckOutcome::passed(check));
                continue;
            }

            tracing::debug!(check = check.name(), "Validating {}...", check.description());

            match self.evaluate(check, ui) {
                Ok(()) => {
                    tracing::debug!(check = check.name(), "✅ {} passed", check.description());
                    report.record(CheckOutcome::passed(check));
                }
                Err(e) if check.is_fatal() => {
                    tracing::debug!(check = check.name(), error = %e, "Fatal check failed, stopping");
                    return Err(AiServicesError::FatalCheck(e));
                }
                Err(e) => {
                    tracing::debug!(check = check.name(), error = %e, "❌ {} failed", check.description());
                    report.record(CheckOutcome::failed(check, e));
                }
            }
        }

        Ok(report)
    }

    /// Run the checklist and turn recorded failures into a single error.
    ///
    /// Failures are shown through `ui` in execution order, numbered from 1.
    /// The returned [`AiServicesError::ValidationFailed`] carries the report.
    pub fn validate(&self, ui: &mut dyn UserInterface) -> Result<ValidationReport> {
        let report = self.run(ui)?;

        if !report.is_success() {
            ui.error("Validation failed with errors:");
            for line in report.failure_lines() {
                ui.error(&format!("  {}", line));
            }
            return Err(AiServicesError::ValidationFailed { report });
        }

        tracing::info!("All validations passed");
        ui.success("All validations passed");
        Ok(report)
    }

    fn evaluate(
        &self,
        check: CheckKind,
        ui: &mut dyn UserInterface,
    ) -> std::result::Result<(), CheckError> {
        match check {
            CheckKind::Privilege => self.check_privilege(ui),
            CheckKind::Distribution => self.check_distribution(),
            CheckKind::ContainerRuntime => self.check_container_runtime(),
            CheckKind::CpuArchitecture => self.check_power_version(),
            CheckKind::Registration | CheckKind::PackageRepository | CheckKind::License => Ok(()),
        }
    }

    fn check_privilege(&self, ui: &mut dyn UserInterface) -> std::result::Result<(), CheckError> {
        let euid = self.host.effective_uid();

        if euid == 0 {
            tracing::debug!("✅ Current user is root.");
            Ok(())
        } else {
            ui.error("Current user is not root.");
            tracing::debug!(euid, "Effective User ID");
            Err(CheckError::NotRoot { euid })
        }
    }

    fn check_distribution(&self) -> std::result::Result<(), CheckError> {
        let path = &self.host.paths().os_release;
        let content = self
            .host
            .read_to_string(path)
            .map_err(|source| CheckError::ReadFailed {
                path: path.clone(),
                source,
            })?;

        let version = check_os_release(&content, &self.requirements)?;
        tracing::debug!(
            %version,
            "✅ Operating system is {}",
            self.requirements.distribution
        );
        Ok(())
    }

    fn check_container_runtime(&self) -> std::result::Result<(), CheckError> {
        let info = self.runtime.validate()?;
        tracing::debug!(version = %info.version, path = %info.path.display(), "✅ Podman validation passed");
        Ok(())
    }

    fn check_power_version(&self) -> std::result::Result<(), CheckError> {
        let arch = self.host.architecture();
        check_architecture(&arch, &self.requirements)?;

        let path = &self.host.paths().cpuinfo;
        let cpuinfo = self
            .host
            .read_to_string(path)
            .map_err(|source| CheckError::ReadFailed {
                path: path.clone(),
                source,
            })?;

        check_cpu_generation(&cpuinfo, &self.requirements)?;
        tracing::debug!(
            arch = %arch,
            "✅ System is running on IBM {} architecture",
            self.requirements.cpu_generation
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{RuntimeError, RuntimeInfo, RuntimeVersion};
    use crate::ui::MockUI;
    use crate::validation::host::HostPaths;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    const RHEL_9_6: &str = "NAME=\"Red Hat Enterprise Linux\"\nID=\"rhel\"\nVERSION_ID=\"9.6\"\n";
    const RHEL_9_0: &str = "NAME=\"Red Hat Enterprise Linux\"\nID=\"rhel\"\nVERSION_ID=\"9.0\"\n";
    const POWER11: &str = "processor\t: 0\ncpu\t\t: POWER11 (architected), altivec supported\n";
    const POWER10: &str = "processor\t: 0\ncpu\t\t: POWER10 (architected), altivec supported\n";

    struct FakeHost {
        euid: u32,
        arch: String,
        paths: HostPaths,
        files: HashMap<PathBuf, String>,
        reads: RefCell<Vec<PathBuf>>,
    }

    impl FakeHost {
        fn new(os_release: &str, cpuinfo: &str) -> Self {
            let paths = HostPaths::default();
            let mut files = HashMap::new();
            files.insert(paths.os_release.clone(), os_release.to_string());
            files.insert(paths.cpuinfo.clone(), cpuinfo.to_string());
            Self {
                euid: 0,
                arch: "ppc64le".to_string(),
                paths,
                files,
                reads: RefCell::new(Vec::new()),
            }
        }

        fn with_euid(mut self, euid: u32) -> Self {
            self.euid = euid;
            self
        }

        fn with_arch(mut self, arch: &str) -> Self {
            self.arch = arch.to_string();
            self
        }

        fn without_file(mut self, path: &Path) -> Self {
            self.files.remove(path);
            self
        }
    }

    impl Host for FakeHost {
        fn effective_uid(&self) -> u32 {
            self.euid
        }

        fn architecture(&self) -> String {
            self.arch.clone()
        }

        fn paths(&self) -> &HostPaths {
            &self.paths
        }

        fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
            self.reads.borrow_mut().push(path.to_path_buf());
            self.files.get(path).cloned().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory")
            })
        }
    }

    struct FakeRuntime {
        installed: bool,
        calls: Cell<usize>,
    }

    impl FakeRuntime {
        fn installed() -> Self {
            Self {
                installed: true,
                calls: Cell::new(0),
            }
        }

        fn missing() -> Self {
            Self {
                installed: false,
                calls: Cell::new(0),
            }
        }
    }

    impl RuntimeValidator for FakeRuntime {
        fn validate(&self) -> std::result::Result<RuntimeInfo, RuntimeError> {
            self.calls.set(self.calls.get() + 1);
            if self.installed {
                Ok(RuntimeInfo {
                    path: PathBuf::from("/usr/bin/podman"),
                    version: RuntimeVersion::new(5, 4, 0),
                })
            } else {
                Err(RuntimeError::NotInstalled {
                    tool: "podman".to_string(),
                })
            }
        }
    }

    #[test]
    fn all_checks_pass() {
        let host = FakeHost::new(RHEL_9_6, POWER11);
        let runtime = FakeRuntime::installed();
        let mut ui = MockUI::new();

        let report = ValidationRunner::new(&host, &runtime)
            .validate(&mut ui)
            .unwrap();

        assert!(report.is_success());
        assert_eq!(report.outcomes().len(), CHECKLIST.len());
        assert_eq!(ui.headers(), &["Running bootstrap validation...".to_string()]);
        assert!(ui.successes().contains(&"All validations passed".to_string()));
        assert!(!ui.has_errors());
    }

    #[test]
    fn outcomes_follow_checklist_order() {
        let host = FakeHost::new(RHEL_9_6, POWER11);
        let runtime = FakeRuntime::installed();
        let mut ui = MockUI::new();

        let report = ValidationRunner::new(&host, &runtime).run(&mut ui).unwrap();

        let kinds: Vec<_> = report.outcomes().iter().map(|o| o.check).collect();
        assert_eq!(kinds, CHECKLIST.to_vec());
    }

    #[test]
    fn non_root_halts_before_any_other_check() {
        let host = FakeHost::new(RHEL_9_6, POWER11).with_euid(1000);
        let runtime = FakeRuntime::installed();
        let mut ui = MockUI::new();

        let err = ValidationRunner::new(&host, &runtime)
            .validate(&mut ui)
            .unwrap_err();

        assert!(matches!(
            err,
            AiServicesError::FatalCheck(CheckError::NotRoot { euid: 1000 })
        ));
        assert!(host.reads.borrow().is_empty());
        assert_eq!(runtime.calls.get(), 0);
        assert_eq!(ui.errors(), &["Current user is not root.".to_string()]);
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn mixed_failures_are_reported_in_order() {
        let host = FakeHost::new(RHEL_9_0, POWER11);
        let runtime = FakeRuntime::missing();
        let mut ui = MockUI::new();

        let err = ValidationRunner::new(&host, &runtime)
            .validate(&mut ui)
            .unwrap_err();

        assert_eq!(err.to_string(), "2 validation check(s) failed");
        assert_eq!(
            ui.errors(),
            &[
                "Validation failed with errors:".to_string(),
                "  1. unsupported RHEL version: 9.0. Minimum required version is 9.6".to_string(),
                "  2. podman validation failed: podman is not installed or not on PATH"
                    .to_string(),
            ]
        );

        let AiServicesError::ValidationFailed { report } = err else {
            panic!("expected ValidationFailed");
        };
        let failed: Vec<_> = report.failures().map(|(k, _)| k).collect();
        assert_eq!(
            failed,
            vec![CheckKind::Distribution, CheckKind::ContainerRuntime]
        );
        assert_eq!(report.outcomes().len(), CHECKLIST.len());
    }

    #[test]
    fn only_the_fatal_check_stops_the_run() {
        let host = FakeHost::new(RHEL_9_0, POWER10).with_arch("x86_64");
        let runtime = FakeRuntime::missing();
        let mut ui = MockUI::new();

        let report = ValidationRunner::new(&host, &runtime).run(&mut ui).unwrap();

        for outcome in report.outcomes() {
            assert!(
                outcome.is_success() || !outcome.check.is_fatal(),
                "{:?} failed but did not stop the run",
                outcome.check
            );
        }
        assert_eq!(report.outcomes().len(), CHECKLIST.len());
    }

    #[test]
    fn unimplemented_checks_are_never_evaluated() {
        let host = FakeHost::new(RHEL_9_6, POWER11);
        let runtime = FakeRuntime::installed();
        let mut ui = MockUI::new();

        let report = ValidationRunner::new(&host, &runtime).run(&mut ui).unwrap();

        let skipped: Vec<_> = report
            .outcomes()
            .iter()
            .filter(|o| !o.check.is_implemented())
            .map(|o| o.check)
            .collect();
        assert_eq!(
            skipped,
            vec![
                CheckKind::Registration,
                CheckKind::PackageRepository,
                CheckKind::License
            ]
        );
        assert!(report
            .outcomes()
            .iter()
            .filter(|o| !o.check.is_implemented())
            .all(CheckOutcome::is_success));
        assert_eq!(runtime.calls.get(), 1);
        assert_eq!(host.reads.borrow().len(), 2);
    }

    #[test]
    fn failures_do_not_stop_later_checks() {
        let host = FakeHost::new(RHEL_9_0, POWER10);
        let runtime = FakeRuntime::missing();
        let mut ui = MockUI::new();

        let report = ValidationRunner::new(&host, &runtime).run(&mut ui).unwrap();

        assert_eq!(report.outcomes().len(), CHECKLIST.len());
        let failed: Vec<_> = report.failures().map(|(k, _)| k).collect();
        assert_eq!(
            failed,
            vec![
                CheckKind::Distribution,
                CheckKind::ContainerRuntime,
                CheckKind::CpuArchitecture
            ]
        );
        assert_eq!(runtime.calls.get(), 1);
        assert!(host.reads.borrow().contains(&PathBuf::from("/proc/cpuinfo")));
    }

    #[test]
    fn unreadable_os_release_is_recorded() {
        let host =
            FakeHost::new(RHEL_9_6, POWER11).without_file(Path::new("/etc/os-release"));
        let runtime = FakeRuntime::installed();
        let mut ui = MockUI::new();

        let report = ValidationRunner::new(&host, &runtime).run(&mut ui).unwrap();

        let outcome = report.outcome(CheckKind::Distribution).unwrap();
        let err = outcome.result.as_ref().unwrap_err();
        assert!(matches!(err, CheckError::ReadFailed { .. }));
        assert!(err.to_string().contains("/etc/os-release"));
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn wrong_architecture_skips_cpuinfo() {
        let host = FakeHost::new(RHEL_9_6, POWER11).with_arch("x86_64");
        let runtime = FakeRuntime::installed();
        let mut ui = MockUI::new();

        let report = ValidationRunner::new(&host, &runtime).run(&mut ui).unwrap();

        let err = report
            .outcome(CheckKind::CpuArchitecture)
            .unwrap()
            .result
            .as_ref()
            .unwrap_err();
        assert!(matches!(err, CheckError::UnsupportedArchitecture { .. }));
        assert!(!host.reads.borrow().contains(&PathBuf::from("/proc/cpuinfo")));
    }

    #[test]
    fn right_architecture_wrong_generation() {
        let host = FakeHost::new(RHEL_9_6, POWER10);
        let runtime = FakeRuntime::installed();
        let mut ui = MockUI::new();

        let report = ValidationRunner::new(&host, &runtime).run(&mut ui).unwrap();

        let err = report
            .outcome(CheckKind::CpuArchitecture)
            .unwrap()
            .result
            .as_ref()
            .unwrap_err();
        assert!(matches!(err, CheckError::UnsupportedCpuGeneration { .. }));
    }

    #[test]
    fn unreadable_cpuinfo_is_a_read_failure() {
        let host = FakeHost::new(RHEL_9_6, POWER11).without_file(Path::new("/proc/cpuinfo"));
        let runtime = FakeRuntime::installed();
        let mut ui = MockUI::new();

        let report = ValidationRunner::new(&host, &runtime).run(&mut ui).unwrap();

        let err = report
            .outcome(CheckKind::CpuArchitecture)
            .unwrap()
            .result
            .as_ref()
            .unwrap_err();
        assert!(matches!(err, CheckError::ReadFailed { .. }));
    }

    #[test]
    fn placeholder_checks_always_pass() {
        let host = FakeHost::new(RHEL_9_0, POWER10).with_arch("x86_64");
        let runtime = FakeRuntime::missing();
        let mut ui = MockUI::new();

        let report = ValidationRunner::new(&host, &runtime).run(&mut ui).unwrap();

        for check in [
            CheckKind::Registration,
            CheckKind::PackageRepository,
            CheckKind::License,
        ] {
            assert!(report.outcome(check).unwrap().is_success());
        }
    }

    #[test]
    fn custom_requirements_are_used() {
        let host = FakeHost::new(RHEL_9_0, POWER10);
        let runtime = FakeRuntime::installed();
        let mut ui = MockUI::new();
        let requirements = Requirements {
            minimum_os_version: crate::validation::OsVersion::new(9, 0),
            cpu_generation: "POWER10".to_string(),
            ..Requirements::default()
        };

        let runner = ValidationRunner::new(&host, &runtime).with_requirements(requirements);

        assert_eq!(runner.requirements().cpu_generation, "POWER10");
        assert!(runner.validate(&mut ui).is_ok());
    }
}
