//! Pre-workout meal tokenizer
//!
//! Meals are written as `&`-separated items, each `<qty> <food>` or a bare
//! `<food>` meaning one serving: `2 banana & 1 apple & coffee`.

use crate::error::{GymlogError, Result};
use std::fmt;

/// Foods tracked by the meal-effect analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Food {
    Banana,
    Apple,
    Coffee,
    Sandwich,
}

impl Food {
    pub const ALL: [Food; 4] = [Food::Banana, Food::Apple, Food::Coffee, Food::Sandwich];

    pub fn name(&self) -> &'static str {
        match self {
            Food::Banana => "banana",
            Food::Apple => "apple",
            Food::Coffee => "coffee",
            Food::Sandwich => "sandwich",
        }
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Food> {
        let name = name.trim().to_lowercase();
        Food::ALL.into_iter().find(|food| food.name() == name)
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Servings of each tracked food in one meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FoodQuantities {
    pub banana: u32,
    pub apple: u32,
    pub coffee: u32,
    pub sandwich: u32,
}

impl FoodQuantities {
    /// Tokenize a meal description.
    ///
    /// `None` yields all zeros. Untracked foods are ignored; a quantity that is
    /// not a whole number is an error.
    pub fn from_preworkout(info: Option<&str>) -> Result<Self> {
        let mut quantities = FoodQuantities::default();
        let Some(info) = info else {
            return Ok(quantities);
        };

        for item in info.split('&').map(str::trim) {
            let (qty, name) = match item.split_once(' ') {
                Some((qty, name)) => {
                    let qty = qty
                        .parse::<u32>()
                        .map_err(|_| GymlogError::MalformedPreworkout(item.to_string()))?;
                    (qty, name)
                }
                None => (1, item),
            };

            if let Some(food) = Food::from_name(name) {
                let total = quantities.get_mut(food);
                *total = total
                    .checked_add(qty)
                    .ok_or_else(|| GymlogError::MalformedPreworkout(item.to_string()))?;
            }
        }

        Ok(quantities)
    }

    pub fn get(&self, food: Food) -> u32 {
        match food {
            Food::Banana => self.banana,
            Food::Apple => self.apple,
            Food::Coffee => self.coffee,
            Food::Sandwich => self.sandwich,
        }
    }

    fn get_mut(&mut self, food: Food) -> &mut u32 {
        match food {
            Food::Banana => &mut self.banana,
            Food::Apple => &mut self.apple,
            Food::Coffee => &mut self.coffee,
            Food::Sandwich => &mut self.sandwich,
        }
    }
}
