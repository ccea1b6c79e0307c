use std::fmt;

use serde::{Deserialize, Serialize};

/// Career chosen at onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Career {
    Engineer,
    Doctor,
    Teacher,
    Designer,
    Entrepreneur,
}

impl Career {
    pub const ALL: [Career; 5] = [
        Career::Engineer,
        Career::Doctor,
        Career::Teacher,
        Career::Designer,
        Career::Entrepreneur,
    ];

    /// Default (monthly salary, monthly expenses) offered during onboarding
    #[must_use]
    pub fn preset(self) -> (f64, f64) {
        match self {
            Career::Engineer => (80_000.0, 35_000.0),
            Career::Doctor => (120_000.0, 50_000.0),
            Career::Teacher => (45_000.0, 25_000.0),
            Career::Designer => (60_000.0, 30_000.0),
            Career::Entrepreneur => (100_000.0, 60_000.0),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Career::Engineer => "Engineer",
            Career::Doctor => "Doctor",
            Career::Teacher => "Teacher",
            Career::Designer => "Designer",
            Career::Entrepreneur => "Entrepreneur",
        }
    }
}

impl fmt::Display for Career {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Player profile captured at onboarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub career: Career,
    pub monthly_salary: f64,
    pub monthly_expenses: f64,
}

impl UserProfile {
    pub fn new(
        name: impl Into<String>,
        career: Career,
        monthly_salary: f64,
        monthly_expenses: f64,
    ) -> Self {
        Self {
            name: name.into(),
            career,
            monthly_salary,
            monthly_expenses,
        }
    }

    /// Profile using the career's preset salary and expenses
    pub fn with_preset(name: impl Into<String>, career: Career) -> Self {
        let (salary, expenses) = career.preset();
        Self::new(name, career, salary, expenses)
    }

    /// Salary left over after expenses each month; may be negative
    #[must_use]
    pub fn monthly_surplus(&self) -> f64 {
        self.monthly_salary - self.monthly_expenses
    }
}
