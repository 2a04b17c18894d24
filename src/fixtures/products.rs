//! Product Fixtures

use serde::Deserialize;

use crate::promotions::PromotionSpec;

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Unit price as a decimal literal (e.g., "0.79"); quote it in YAML to keep it textual
    pub price: String,

    /// Optional promotion attached to the product
    #[serde(default)]
    pub promotion: Option<PromotionFixture>,
}

/// Promotion fixture from YAML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromotionFixture {
    /// Every `every`th unit is free
    GetOneFree {
        /// Group size
        every: u32,
    },

    /// Percent off units in complete packages
    Package {
        /// Package size
        size: u32,

        /// Percent points off
        percent: u32,
    },

    /// Percent off units past a threshold
    Threshold {
        /// Threshold quantity
        after: u32,

        /// Percent points off
        percent: u32,
    },
}

impl From<PromotionFixture> for PromotionSpec {
    fn from(fixture: PromotionFixture) -> Self {
        match fixture {
            PromotionFixture::GetOneFree { every } => PromotionSpec::GetOneFree(every),
            PromotionFixture::Package { size, percent } => PromotionSpec::Package { size, percent },
            PromotionFixture::Threshold { after, percent } => {
                PromotionSpec::Threshold { after, percent }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn product_without_promotion() -> TestResult {
        let product: ProductFixture = serde_norway::from_str("name: Green Tea\nprice: \"0.79\"\n")?;

        assert_eq!(product.name, "Green Tea");
        assert_eq!(product.price, "0.79");
        assert_eq!(product.promotion, None);

        Ok(())
    }

    #[test]
    fn promotion_types_map_to_specs() -> TestResult {
        let get_one_free: PromotionFixture = serde_norway::from_str("type: get_one_free\nevery: 3\n")?;
        let package: PromotionFixture =
            serde_norway::from_str("type: package\nsize: 4\npercent: 20\n")?;
        let threshold: PromotionFixture =
            serde_norway::from_str("type: threshold\nafter: 10\npercent: 15\n")?;

        assert_eq!(PromotionSpec::from(get_one_free), PromotionSpec::GetOneFree(3));
        assert_eq!(
            PromotionSpec::from(package),
            PromotionSpec::Package {
                size: 4,
                percent: 20
            }
        );
        assert_eq!(
            PromotionSpec::from(threshold),
            PromotionSpec::Threshold {
                after: 10,
                percent: 15
            }
        );

        Ok(())
    }

    #[test]
    fn unknown_promotion_type_is_rejected() {
        let result: Result<PromotionFixture, _> = serde_norway::from_str("type: bogof\nevery: 2\n");

        assert!(result.is_err());
    }
}
