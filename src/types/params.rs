//! Sampling parameter types.
//!
//! The run API exposes two mutually exclusive randomness controls,
//! `temperature` and `top_p`. [`TemperatureParam`] models that choice as a
//! single value so a request can never carry both.

use crate::error::RunError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

const SAMPLING_RANGE: RangeInclusive<f64> = 0.0..=2.0;
const NUCLEUS_PERCENT_RANGE: RangeInclusive<i32> = 0..=100;

/// Sampling temperature, between 0 and 2.
///
/// Higher values like 0.8 make the output more random, while lower values
/// like 0.2 make it more focused and deterministic.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SamplingTemperature(f64);

impl SamplingTemperature {
    /// Create a sampling temperature, rejecting values outside `[0.0, 2.0]`
    pub fn new(temperature: f64) -> Result<Self, RunError> {
        if !SAMPLING_RANGE.contains(&temperature) {
            return Err(RunError::out_of_range(
                "temperature",
                *SAMPLING_RANGE.start(),
                *SAMPLING_RANGE.end(),
                temperature,
            ));
        }
        Ok(Self(temperature))
    }

    /// Raw temperature value
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for SamplingTemperature {
    type Error = RunError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SamplingTemperature> for f64 {
    fn from(t: SamplingTemperature) -> Self {
        t.0
    }
}

/// Nucleus sampling expressed as a percentage of probability mass, 0 to 100.
///
/// The model only considers the tokens comprising the top `percent`% of
/// probability mass, so 10 means the top 10%. On the wire this becomes
/// `top_p = percent / 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct NucleusSamplingTemperature(i32);

impl NucleusSamplingTemperature {
    /// Create a nucleus sampling percentage, rejecting values outside `[0, 100]`
    pub fn new(percent: i32) -> Result<Self, RunError> {
        if !NUCLEUS_PERCENT_RANGE.contains(&percent) {
            return Err(RunError::out_of_range(
                "top_p percent",
                f64::from(*NUCLEUS_PERCENT_RANGE.start()),
                f64::from(*NUCLEUS_PERCENT_RANGE.end()),
                f64::from(percent),
            ));
        }
        Ok(Self(percent))
    }

    /// Percentage as given
    pub const fn percent(self) -> i32 {
        self.0
    }

    /// Probability mass in `[0.0, 1.0]`, as sent in `top_p`
    pub fn top_p(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl TryFrom<i32> for NucleusSamplingTemperature {
    type Error = RunError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NucleusSamplingTemperature> for i32 {
    fn from(p: NucleusSamplingTemperature) -> Self {
        p.0
    }
}

/// The caller's single choice of randomness control for a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemperatureParam {
    /// Use `temperature`
    Sampling(SamplingTemperature),
    /// Use `top_p`
    Nucleus(NucleusSamplingTemperature),
}

impl TemperatureParam {
    /// Validated sampling temperature
    pub fn sampling(temperature: f64) -> Result<Self, RunError> {
        SamplingTemperature::new(temperature).map(Self::Sampling)
    }

    /// Validated nucleus sampling percentage
    pub fn nucleus(percent: i32) -> Result<Self, RunError> {
        NucleusSamplingTemperature::new(percent).map(Self::Nucleus)
    }
}

impl From<SamplingTemperature> for TemperatureParam {
    fn from(t: SamplingTemperature) -> Self {
        Self::Sampling(t)
    }
}

impl From<NucleusSamplingTemperature> for TemperatureParam {
    fn from(p: NucleusSamplingTemperature) -> Self {
        Self::Nucleus(p)
    }
}
