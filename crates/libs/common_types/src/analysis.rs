use enum_binding::enum_kind;
use serde::Serialize;

enum_kind! {
    /// Categories of analysis that can run on a bio image.
    #[derive(Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum AnalysisType {
        /// Quality score in the range 0-100 (ISO/IEC 29794-1:2016).
        Quality => "QUALITY",
        /// Image format, e.g. `image/jpg`.
        Format => "FORMAT",
        /// Image resolution, e.g. 500dpi.
        Resolution => "RESOLUTION",
    }
}
