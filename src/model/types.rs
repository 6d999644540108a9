use crate::error::{GardenError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vegetable,
    Herb,
    Flower,
    Fruit,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Vegetable => write!(f, "vegetable"),
            Category::Herb => write!(f, "herb"),
            Category::Flower => write!(f, "flower"),
            Category::Fruit => write!(f, "fruit"),
        }
    }
}

impl FromStr for Category {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "vegetable" => Ok(Category::Vegetable),
            "herb" => Ok(Category::Herb),
            "flower" => Ok(Category::Flower),
            "fruit" => Ok(Category::Fruit),
            _ => Err(GardenError::Parse(format!("Invalid category: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Moderate => write!(f, "moderate"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sun {
    Full,
    Partial,
    Shade,
}

impl fmt::Display for Sun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sun::Full => write!(f, "full sun"),
            Sun::Partial => write!(f, "partial sun"),
            Sun::Shade => write!(f, "shade"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Water {
    Low,
    Moderate,
    High,
}

impl fmt::Display for Water {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Water::Low => write!(f, "low"),
            Water::Moderate => write!(f, "moderate"),
            Water::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrostTolerance {
    Hardy,
    SemiHardy,
    Tender,
}

impl fmt::Display for FrostTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrostTolerance::Hardy => write!(f, "hardy"),
            FrostTolerance::SemiHardy => write!(f, "semi-hardy"),
            FrostTolerance::Tender => write!(f, "tender"),
        }
    }
}
