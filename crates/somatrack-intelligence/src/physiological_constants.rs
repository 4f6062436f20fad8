// ABOUTME: Anthropometric formula tables for density, body-fat and AAHPERD lookups
// ABOUTME: Age- and gender-banded coefficients and thresholds, pure data with no logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

//! Anthropometric constants
//!
//! Coefficient and threshold tables used by the metrics engine. The values
//! are domain constants and must be reproduced exactly; the lookup logic lives
//! in `crate::algorithms`.

/// Body mass index classification (WHO adult cut points)
pub mod bmi {
    /// Upper bound (exclusive) of the underweight band
    pub const UNDERWEIGHT_UPPER: f64 = 18.5;
    /// Upper bound (exclusive) of the normal band
    pub const NORMAL_UPPER: f64 = 25.0;
    /// Upper bound (exclusive) of the overweight band
    pub const OVERWEIGHT_UPPER: f64 = 30.0;
}

/// Durnin-Womersley body density regression
///
/// Applied as `density = intercept - slope * (sum of 4 skinfolds / 10)`.
///
/// Reference: Durnin, J.V.G.A. & Womersley, J. (1974). Body fat assessed from
/// total body density and its estimation from skinfold thickness.
/// *British Journal of Nutrition*, 32(1), 77-97.
pub mod body_density {
    /// Linear regression coefficients for one age band and gender
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DensityCoefficients {
        /// Constant term `a`
        pub intercept: f64,
        /// Multiplier `b` applied to `sum / 10`
        pub slope: f64,
    }

    /// Age band with gender-specific coefficients
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DensityBand {
        /// First age (inclusive) covered by the band
        pub min_age: u32,
        /// Last age (inclusive) covered, `None` for the open-ended band
        pub max_age: Option<u32>,
        /// Male coefficients
        pub male: DensityCoefficients,
        /// Female coefficients
        pub female: DensityCoefficients,
    }

    /// Divisor applied to the skinfold sum before the slope
    pub const SUM_DIVISOR: f64 = 10.0;

    /// Age bands in ascending order; ages below the first band have no formula
    pub const BANDS: [DensityBand; 5] = [
        DensityBand {
            min_age: 16,
            max_age: Some(19),
            male: DensityCoefficients {
                intercept: 1.1620,
                slope: 0.0630,
            },
            female: DensityCoefficients {
                intercept: 1.1549,
                slope: 0.0678,
            },
        },
        DensityBand {
            min_age: 20,
            max_age: Some(29),
            male: DensityCoefficients {
                intercept: 1.1631,
                slope: 0.0632,
            },
            female: DensityCoefficients {
                intercept: 1.1599,
                slope: 0.0717,
            },
        },
        DensityBand {
            min_age: 30,
            max_age: Some(39),
            male: DensityCoefficients {
                intercept: 1.1422,
                slope: 0.0544,
            },
            female: DensityCoefficients {
                intercept: 1.1423,
                slope: 0.0632,
            },
        },
        DensityBand {
            min_age: 40,
            max_age: Some(49),
            male: DensityCoefficients {
                intercept: 1.1620,
                slope: 0.0700,
            },
            female: DensityCoefficients {
                intercept: 1.1333,
                slope: 0.0612,
            },
        },
        DensityBand {
            min_age: 50,
            max_age: None,
            male: DensityCoefficients {
                intercept: 1.1715,
                slope: 0.0779,
            },
            female: DensityCoefficients {
                intercept: 1.1339,
                slope: 0.0645,
            },
        },
    ];
}

/// Siri two-compartment equation: `%fat = (4.95 / density - 4.50) * 100`
///
/// Reference: Siri, W.E. (1961). Body composition from fluid spaces and density.
pub mod siri {
    /// Numerator applied to the density
    pub const DENSITY_NUMERATOR: f64 = 4.95;
    /// Constant subtracted from the quotient
    pub const OFFSET: f64 = 4.50;
    /// Scale to percent
    pub const PERCENT_SCALE: f64 = 100.0;
}

/// Body-fat classification and percentile tables by age tier and gender
///
/// Classification arrays hold the upper bounds (exclusive) of the
/// Very Low, Low, Acceptable, Average and High bands, followed by the
/// population ceiling. Percentile arrays hold the 5th, 10th, 25th, 50th,
/// 75th, 90th and 95th cut points.
pub mod body_fat {
    /// Youngest age covered by the tables
    pub const MIN_AGE: u32 = 18;
    /// Last age (inclusive) of the young adult tier
    pub const YOUNG_ADULT_MAX_AGE: u32 = 39;
    /// Last age (inclusive) of the middle age tier
    pub const MIDDLE_AGE_MAX_AGE: u32 = 59;

    /// Male 18-39 band bounds
    pub const MALE_18_39_BANDS: [f64; 6] = [8.0, 11.0, 14.0, 18.0, 25.0, 35.0];
    /// Male 40-59 band bounds
    pub const MALE_40_59_BANDS: [f64; 6] = [11.0, 14.0, 17.0, 22.0, 28.0, 38.0];
    /// Male 60+ band bounds
    pub const MALE_60_PLUS_BANDS: [f64; 6] = [13.0, 16.0, 20.0, 25.0, 30.0, 40.0];
    /// Female 18-39 band bounds
    pub const FEMALE_18_39_BANDS: [f64; 6] = [16.0, 20.0, 22.0, 25.0, 32.0, 42.0];
    /// Female 40-59 band bounds
    pub const FEMALE_40_59_BANDS: [f64; 6] = [20.0, 24.0, 26.0, 30.0, 35.0, 45.0];
    /// Female 60+ band bounds
    pub const FEMALE_60_PLUS_BANDS: [f64; 6] = [22.0, 26.0, 29.0, 33.0, 38.0, 48.0];

    /// Male 18-39 percentile cut points
    pub const MALE_18_39_PERCENTILES: [f64; 7] = [5.0, 8.0, 11.0, 14.0, 18.0, 25.0, 35.0];
    /// Male 40-59 percentile cut points
    pub const MALE_40_59_PERCENTILES: [f64; 7] = [8.0, 11.0, 14.0, 17.0, 22.0, 28.0, 38.0];
    /// Male 60+ percentile cut points
    pub const MALE_60_PLUS_PERCENTILES: [f64; 7] = [10.0, 13.0, 16.0, 20.0, 25.0, 30.0, 40.0];
    /// Female 18-39 percentile cut points
    pub const FEMALE_18_39_PERCENTILES: [f64; 7] = [12.0, 16.0, 20.0, 22.0, 25.0, 32.0, 42.0];
    /// Female 40-59 percentile cut points
    pub const FEMALE_40_59_PERCENTILES: [f64; 7] = [16.0, 20.0, 24.0, 26.0, 30.0, 35.0, 45.0];
    /// Female 60+ percentile cut points
    pub const FEMALE_60_PLUS_PERCENTILES: [f64; 7] = [18.0, 22.0, 26.0, 29.0, 33.0, 38.0, 48.0];
}

/// AAHPERD triceps + subscapular skinfold tables
///
/// The university tables (ages 18-25) follow the AAHPERD physical best
/// norms. The general tables are an approximation kept as opaque constants;
/// they are not a continuation of the university tables.
pub mod aahperd {
    /// First age (inclusive) of the university population
    pub const UNIVERSITY_MIN_AGE: u32 = 18;
    /// Last age (inclusive) of the university population
    pub const UNIVERSITY_MAX_AGE: u32 = 25;

    /// University men percentile cut points (mm)
    pub const UNIVERSITY_MALE_PERCENTILES: [f64; 7] = [8.0, 10.0, 13.0, 17.0, 22.0, 28.0, 32.0];
    /// University women percentile cut points (mm)
    pub const UNIVERSITY_FEMALE_PERCENTILES: [f64; 7] = [12.0, 15.0, 19.0, 24.0, 30.0, 37.0, 42.0];
    /// General men percentile cut points (mm)
    pub const GENERAL_MALE_PERCENTILES: [f64; 7] = [10.0, 12.0, 15.0, 19.0, 24.0, 30.0, 34.0];
    /// General women percentile cut points (mm)
    pub const GENERAL_FEMALE_PERCENTILES: [f64; 7] = [14.0, 17.0, 21.0, 26.0, 32.0, 39.0, 44.0];

    /// University men classification bounds (inclusive), Excellent..Below Average
    pub const UNIVERSITY_MALE_CLASSES: [f64; 5] = [10.0, 13.0, 17.0, 22.0, 28.0];
    /// University women classification bounds (inclusive)
    pub const UNIVERSITY_FEMALE_CLASSES: [f64; 5] = [15.0, 19.0, 24.0, 30.0, 37.0];
    /// General men classification bounds (inclusive)
    pub const GENERAL_MALE_CLASSES: [f64; 5] = [12.0, 15.0, 19.0, 24.0, 30.0];
    /// General women classification bounds (inclusive)
    pub const GENERAL_FEMALE_CLASSES: [f64; 5] = [17.0, 21.0, 26.0, 32.0, 39.0];
}

/// Percentile buckets shared by every percentile table
pub mod percentiles {
    /// Bucket labels matching the seven cut points of each table
    pub const BUCKETS: [u8; 7] = [5, 10, 25, 50, 75, 90, 95];
}
