//! Asset categories and per-category amounts
//!
//! Every portfolio bucket, contribution request, and period return is a
//! `CategoryAmounts`. Iteration always follows `AssetCategory::ALL` so that
//! random draws made per category happen in a stable order for a given seed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A portfolio bucket with its own return behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetCategory {
    /// Systematic investment plan (mutual fund SIP)
    Sip,
    Stocks,
    Gold,
    RealEstate,
    /// Plain savings account, never earns a return
    Savings,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 5] = [
        AssetCategory::Sip,
        AssetCategory::Stocks,
        AssetCategory::Gold,
        AssetCategory::RealEstate,
        AssetCategory::Savings,
    ];

    /// Wire key, matching the serde representation
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            AssetCategory::Sip => "sip",
            AssetCategory::Stocks => "stocks",
            AssetCategory::Gold => "gold",
            AssetCategory::RealEstate => "realEstate",
            AssetCategory::Savings => "savings",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AssetCategory::Sip => "SIP",
            AssetCategory::Stocks => "Stocks",
            AssetCategory::Gold => "Gold",
            AssetCategory::RealEstate => "Real Estate",
            AssetCategory::Savings => "Savings",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One currency amount per asset category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAmounts {
    #[serde(default)]
    pub sip: f64,
    #[serde(default)]
    pub stocks: f64,
    #[serde(default)]
    pub gold: f64,
    #[serde(default)]
    pub real_estate: f64,
    #[serde(default)]
    pub savings: f64,
}

impl CategoryAmounts {
    /// Build amounts by evaluating `f` for each category in `AssetCategory::ALL` order.
    pub fn from_fn(mut f: impl FnMut(AssetCategory) -> f64) -> Self {
        let mut amounts = Self::default();
        for category in AssetCategory::ALL {
            amounts.set(category, f(category));
        }
        amounts
    }

    #[must_use]
    pub fn get(&self, category: AssetCategory) -> f64 {
        match category {
            AssetCategory::Sip => self.sip,
            AssetCategory::Stocks => self.stocks,
            AssetCategory::Gold => self.gold,
            AssetCategory::RealEstate => self.real_estate,
            AssetCategory::Savings => self.savings,
        }
    }

    pub fn get_mut(&mut self, category: AssetCategory) -> &mut f64 {
        match category {
            AssetCategory::Sip => &mut self.sip,
            AssetCategory::Stocks => &mut self.stocks,
            AssetCategory::Gold => &mut self.gold,
            AssetCategory::RealEstate => &mut self.real_estate,
            AssetCategory::Savings => &mut self.savings,
        }
    }

    pub fn set(&mut self, category: AssetCategory, amount: f64) {
        *self.get_mut(category) = amount;
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, category: AssetCategory, amount: f64) -> Self {
        self.set(category, amount);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (AssetCategory, f64)> + '_ {
        AssetCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, amount)| amount).sum()
    }

    /// True when every category holds a strictly positive amount
    #[must_use]
    pub fn is_all_positive(&self) -> bool {
        self.iter().all(|(_, amount)| amount > 0.0)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, amount)| amount == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_order_is_stable() {
        let amounts = CategoryAmounts::from_fn(|c| c as usize as f64);
        let order: Vec<_> = amounts.iter().map(|(c, _)| c).collect();
        assert_eq!(order, AssetCategory::ALL.to_vec());
        assert_eq!(amounts.real_estate, 3.0);
    }

    #[test]
    fn test_total_and_positivity() {
        let amounts = CategoryAmounts::default()
            .with(AssetCategory::Sip, 100.0)
            .with(AssetCategory::Gold, 50.0);
        assert_eq!(amounts.total(), 150.0);
        assert!(!amounts.is_all_positive());
        assert!(!amounts.is_zero());

        let all = CategoryAmounts::from_fn(|_| 1.0);
        assert!(all.is_all_positive());
        assert!(CategoryAmounts::default().is_zero());
    }

    #[test]
    fn test_wire_keys_are_camel_case() {
        let amounts = CategoryAmounts::default().with(AssetCategory::RealEstate, 10.0);
        let json = serde_json::to_string(&amounts).unwrap();
        assert!(json.contains("\"realEstate\":10.0"));
        let category: AssetCategory = serde_json::from_str("\"realEstate\"").unwrap();
        assert_eq!(category, AssetCategory::RealEstate);
        assert_eq!(category.to_string(), "realEstate");
    }
}
