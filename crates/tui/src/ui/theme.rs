use engine::{BudgetStatus, Category};
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface_bright: Color,
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            surface_bright: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            text_muted: Color::Rgb(170, 170, 170),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            border: Color::Rgb(60, 70, 80),
            border_focused: Color::Rgb(80, 160, 160),
            positive: Color::Rgb(34, 197, 94),
            negative: Color::Rgb(239, 68, 68),
            warning: Color::Rgb(234, 179, 8),
            error: Color::Rgb(200, 80, 80),
        }
    }
}

impl Theme {
    pub fn category_color(&self, category: Category) -> Color {
        let (r, g, b) = category.rgb();
        Color::Rgb(r, g, b)
    }

    pub fn budget_color(&self, status: BudgetStatus) -> Color {
        match status {
            BudgetStatus::Ok => self.positive,
            BudgetStatus::Near => self.warning,
            BudgetStatus::Over => self.negative,
        }
    }
}
