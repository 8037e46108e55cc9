//! Check descriptors.
//!
//! The checklist is a fixed, ordered list of [`CheckKind`] values. Checks that
//! have no real logic yet are ordinary variants reporting
//! `is_implemented() == false`, so they are easy to find and replace.

/// One step of the bootstrap checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Effective user must be root. Failure halts the run.
    Privilege,
    /// OS must be a supported RHEL release.
    Distribution,
    /// Host must be registered with Red Hat Network. Not yet implemented.
    Registration,
    /// LTC yum repository must provide the service-report package. Not yet implemented.
    PackageRepository,
    /// A compatible podman must be installed.
    ContainerRuntime,
    /// Host must be ppc64le on a POWER11 processor.
    CpuArchitecture,
    /// A valid RHAIIS license must be present. Not yet implemented.
    License,
}

/// Every check, in execution order.
pub const CHECKLIST: [CheckKind; 7] = [
    CheckKind::Privilege,
    CheckKind::Distribution,
    CheckKind::Registration,
    CheckKind::PackageRepository,
    CheckKind::ContainerRuntime,
    CheckKind::CpuArchitecture,
    CheckKind::License,
];

impl CheckKind {
    /// Short machine-friendly name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Privilege => "root",
            Self::Distribution => "os",
            Self::Registration => "rhn-registration",
            Self::PackageRepository => "ltc-repository",
            Self::ContainerRuntime => "podman",
            Self::CpuArchitecture => "power-version",
            Self::License => "rhaiis-license",
        }
    }

    /// Human-readable description shown while the check runs.
    pub fn description(self) -> &'static str {
        match self {
            Self::Privilege => "root privileges",
            Self::Distribution => "operating system",
            Self::Registration => "RHN registration",
            Self::PackageRepository => "LTC RPM repository",
            Self::ContainerRuntime => "podman installation",
            Self::CpuArchitecture => "IBM Power version",
            Self::License => "RHAIIS license",
        }
    }

    /// Whether a failure of this check stops the whole run.
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::Privilege)
    }

    /// Whether this check inspects anything yet. Unimplemented checks always pass.
    pub fn is_implemented(self) -> bool {
        !matches!(
            self,
            Self::Registration | Self::PackageRepository | Self::License
        )
    }
}
