//! Report generation port trait.

use crate::domain::dashboard::Dashboard;
use crate::domain::error::PortfelError;

/// Port for rendering a derived dashboard bundle.
pub trait ReportPort {
    /// Write the bundle to `output_path`; `"-"` means stdout.
    fn write(&self, dashboard: &Dashboard, output_path: &str) -> Result<(), PortfelError>;
}
