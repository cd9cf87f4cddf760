//! Plain-text rendering of engine output for the terminal

use pizza_engine::{Recipe, RecipePhase, ShoppingListItem, SummaryEntry};
use serde::Serialize;

/// Everything the preview shows, for JSON output
#[derive(Debug, Serialize)]
pub struct Preview<'a> {
    pub summary: &'a [SummaryEntry],
    pub recipe: &'a Recipe,
    pub shopping_list_title: &'a str,
    pub shopping_list: &'a [ShoppingListItem],
    pub start_time_in_past: bool,
}

fn render_phase(out: &mut String, phase: &RecipePhase) {
    out.push_str(&format!(
        "\n{}{}\n{}\n",
        phase.day_prefix.as_deref().unwrap_or_default(),
        phase.title,
        phase.date
    ));
    for (n, step) in phase.steps.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {}\n", n + 1, step));
    }
}

pub fn render_recipe(recipe: &Recipe) -> String {
    let mut out = format!("{}\n{}\n", recipe.title, recipe.total_time);
    if let Some(pre_dough) = &recipe.pre_dough {
        render_phase(&mut out, pre_dough);
    }
    render_phase(&mut out, &recipe.main_dough);
    render_phase(&mut out, &recipe.baking);
    out.push_str(&format!("\n{}\n", recipe.eating_date));
    out
}

pub fn render_shopping_list(title: &str, items: &[ShoppingListItem]) -> String {
    let width = items.iter().map(|i| i.name.chars().count()).max().unwrap_or(0);
    let mut out = format!("{}\n", title);
    for item in items {
        let mark = if item.checked { 'x' } else { ' ' };
        out.push_str(&format!("  [{}] {:<width$}  {}\n", mark, item.name, item.amount));
    }
    out
}

pub fn render_summary(entries: &[SummaryEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}: {}\n", e.label, e.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(title: &str, prefix: Option<&str>, steps: &[&str]) -> RecipePhase {
        RecipePhase {
            title: title.to_string(),
            day_prefix: prefix.map(str::to_string),
            date: "Dienstag, 02.07.2024, 16:00 Uhr".to_string(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_recipe_numbers_steps_per_phase() {
        let recipe = Recipe {
            title: "Pizza Rezept".to_string(),
            pre_dough: None,
            main_dough: phase("Hauptteig", Some("Ein Tag später: "), &["a", "b"]),
            baking: phase("Backen", None, &["c"]),
            eating_date: "Dienstag, 02.07.2024, 20:00 Uhr".to_string(),
            total_time: "2 Stunden".to_string(),
        };
        let text = render_recipe(&recipe);
        assert!(text.starts_with("Pizza Rezept\n2 Stunden\n"));
        assert!(text.contains("Ein Tag später: Hauptteig\n"));
        assert!(text.contains("   2. b\n"));
        assert!(text.contains("   1. c\n"));
        assert!(text.ends_with("20:00 Uhr\n"));
    }

    #[test]
    fn test_render_shopping_list_aligns_amounts() {
        let mut salt = ShoppingListItem::new("Salz", "15g");
        salt.checked = true;
        let items = vec![ShoppingListItem::new("Mehl (Tipo 00)", "509g"), salt];
        let text = render_shopping_list("Einkaufsliste", &items);
        assert_eq!(
            text,
            "Einkaufsliste\n  [ ] Mehl (Tipo 00)  509g\n  [x] Salz            15g\n"
        );
    }

    #[test]
    fn test_render_summary() {
        let entries = vec![SummaryEntry {
            label: "Hefe".to_string(),
            value: "Trockenhefe".to_string(),
        }];
        assert_eq!(render_summary(&entries), "Hefe: Trockenhefe\n");
    }
}
