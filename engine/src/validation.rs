//! Validation utilities for configuration values
//!
//! The UI only offers enumerated selections, so these checks exist to decide
//! when the normalizer has to fall back to a default.

// ============================================================================
// Dough Validations
// ============================================================================

pub const MIN_PIZZA_COUNT: u32 = 2;
pub const MAX_PIZZA_COUNT: u32 = 32;

/// Hydration levels offered by the configurator
pub const HYDRATION_LEVELS: &[u8] = &[60, 65, 70, 75, 80];

/// Pre-dough shares offered by the configurator
pub const PREDOUGH_PERCENTAGES: &[u8] = &[10, 20, 30, 40, 50, 60];

/// Validate pizza count is within the selectable range
pub fn validate_pizza_count(count: u32) -> Result<(), &'static str> {
    if count < MIN_PIZZA_COUNT {
        return Err("At least 2 pizzas are required");
    }
    if count > MAX_PIZZA_COUNT {
        return Err("At most 32 pizzas are supported");
    }
    Ok(())
}

/// Validate hydration is one of the offered levels
pub fn validate_hydration(percent: u8) -> Result<(), &'static str> {
    if HYDRATION_LEVELS.contains(&percent) {
        Ok(())
    } else {
        Err("Hydration must be one of 60, 65, 70, 75 or 80 percent")
    }
}

/// Validate pre-dough share is one of the offered percentages
pub fn validate_predough_percent(percent: u8) -> Result<(), &'static str> {
    if PREDOUGH_PERCENTAGES.contains(&percent) {
        Ok(())
    } else {
        Err("Pre-dough share must be between 10 and 60 percent in steps of 10")
    }
}

// ============================================================================
// Date Validations
// ============================================================================

/// Validate eating time format (HH:MM, 24h clock)
pub fn validate_time_format(time: &str) -> Result<(), &'static str> {
    let parts: Vec<&str> = time.trim().split(':').collect();

    if parts.len() != 2 {
        return Err("Time must be in format HH:MM");
    }
    if parts.iter().any(|p| p.is_empty() || p.len() > 2 || !p.chars().all(|c| c.is_ascii_digit())) {
        return Err("Time must be in format HH:MM");
    }

    Ok(())
}

/// Validate eating date format (YYYY-MM-DD)
pub fn validate_date_format(date: &str) -> Result<(), &'static str> {
    let parts: Vec<&str> = date.trim().split('-').collect();

    if parts.len() != 3 {
        return Err("Date must be in format YYYY-MM-DD");
    }
    if parts[0].len() != 4 || !parts[0].chars().all(|c| c.is_ascii_digit()) {
        return Err("Invalid year in date");
    }
    if parts[1].len() != 2 || !parts[1].chars().all(|c| c.is_ascii_digit()) {
        return Err("Invalid month in date");
    }
    if parts[2].len() != 2 || !parts[2].chars().all(|c| c.is_ascii_digit()) {
        return Err("Invalid day in date");
    }

    Ok(())
}
