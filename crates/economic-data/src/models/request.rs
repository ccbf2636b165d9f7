use super::observation::Frequency;

/// Parameters for a single provider fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesRequest {
    /// Country code; providers normalize its case.
    pub country: String,

    /// Provider-specific indicator id (e.g. `FP.CPI.TOTL.ZG`, `PCPIPCH`).
    pub indicator: String,

    /// Requested frequency. Ignored by annual-only providers.
    pub frequency: Frequency,

    /// First year to include (inclusive).
    pub start_year: Option<i32>,

    /// Last year to include (inclusive).
    pub end_year: Option<i32>,

    /// CORS proxy template, owned by the caller's settings.
    pub proxy_base: Option<String>,
}

impl SeriesRequest {
    pub fn new(country: impl Into<String>, indicator: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            indicator: indicator.into(),
            ..Default::default()
        }
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_years(mut self, start_year: Option<i32>, end_year: Option<i32>) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    pub fn with_proxy(mut self, proxy_base: impl Into<String>) -> Self {
        self.proxy_base = Some(proxy_base.into());
        self
    }
}
