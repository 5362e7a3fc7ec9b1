use once_cell::sync::Lazy;
use serde::Serialize;
use sysinfo::{CpuExt, System, SystemExt};

#[derive(Debug, Serialize, Clone)]
pub struct PlatformInfo {
    pub host: String,
    pub os: String,
    pub arch: String,
    #[serde(rename = "cpu-model")]
    pub cpu_model: String,
}

pub static PLATFORM_INFO: Lazy<PlatformInfo> = Lazy::new(|| {
    let mut sys = System::new();
    sys.refresh_cpu();
    const UNKNOWN: &str = "<unknown>";
    PlatformInfo {
        host: sys.host_name().unwrap_or(UNKNOWN.to_string()),
        os: sys.long_os_version().unwrap_or(UNKNOWN.to_string()),
        arch: std::env::consts::ARCH.to_string(),
        cpu_model: sys.global_cpu_info().brand().to_owned(),
    }
});
