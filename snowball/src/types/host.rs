//! Host and runtime identity types

/// Operating system identity of the host
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostInfo {
    /// Network node name
    pub hostname: Option<String>,
    /// OS family name ("Linux", "Windows", "Darwin", ...)
    pub system: String,
    /// Kernel release
    pub release: Option<String>,
    /// OS version string
    pub version: Option<String>,
    /// Machine architecture (e.g., "x86_64", "aarch64")
    pub architecture: String,
    /// Distribution name (e.g., "Ubuntu"), Linux only
    pub distribution_name: Option<String>,
    /// Distribution identifier (e.g., "ubuntu"), Linux only
    pub distribution_id: Option<String>,
}

/// Identity of the toolchain that built the running program
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuntimeInfo {
    /// Language implementation
    pub implementation: String,
    /// Language version the program targets
    pub version: Option<String>,
    /// Program version and build profile
    pub build: Option<String>,
    /// Compiler target triple components
    pub compiler: Option<String>,
}
