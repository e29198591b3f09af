//! Starfield background - twinkling stars and the odd shooting star
//!
//! Positions are stored as fractions of the area so a resize never needs a
//! new field. Everything is a pure function of the elapsed time.

use std::f32::consts::TAU;
use std::time::Duration;

use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::tui::themes::Theme;

/// Cells trailing behind a shooting star's head
const TAIL_LENGTH: u16 = 6;

#[derive(Debug, Clone, Copy)]
struct Star {
    x: f32,
    y: f32,
    /// Seconds per twinkle
    period: f32,
    /// Negative start offset so stars are out of step
    phase: f32,
}

#[derive(Debug, Clone, Copy)]
struct ShootingStar {
    y: f32,
    /// Seconds to cross the sky
    duration: f32,
    /// Seconds before the first crossing
    delay: f32,
}

/// Animated sky drawn behind the toolbar
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    shooting: Vec<ShootingStar>,
}

impl Starfield {
    pub fn new(stars: usize, shooting_stars: usize, rng: &mut impl Rng) -> Self {
        let stars = (0..stars)
            .map(|_| {
                let period = rng.gen_range(2.0..3.9);
                Star {
                    x: rng.gen_range(0.0..1.0),
                    y: rng.gen_range(0.0..1.0),
                    period,
                    phase: -rng.gen_range(0.0..period),
                }
            })
            .collect();
        let shooting = (0..shooting_stars)
            .map(|_| ShootingStar {
                y: rng.gen_range(0.0..0.6),
                duration: rng.gen_range(5.0..9.0),
                delay: rng.gen_range(0.0..50.0),
            })
            .collect();
        Self { stars, shooting }
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    /// Paint sky, stars and shooting stars into `area` at time `elapsed`
    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &Theme, elapsed: Duration) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        paint_sky(buf, area, theme);

        let t = elapsed.as_secs_f32();
        for star in &self.stars {
            let (x, y) = place(area, star.x, star.y);
            let brightness = twinkle(star, t);
            let (glyph, modifier) = match brightness {
                b if b > 0.8 => ("✦", Modifier::BOLD),
                b if b > 0.4 => ("•", Modifier::empty()),
                _ => ("·", Modifier::DIM),
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(glyph)
                    .set_style(Style::default().fg(theme.star_color).add_modifier(modifier));
            }
        }

        for star in &self.shooting {
            self.render_shooting(buf, area, theme, star, t);
        }
    }

    fn render_shooting(&self, buf: &mut Buffer, area: Rect, theme: &Theme, star: &ShootingStar, t: f32) {
        let Some(progress) = crossing_progress(star, t) else {
            return;
        };
        let travel = (area.width + TAIL_LENGTH) as f32;
        let head = (progress * travel) as i32 - TAIL_LENGTH as i32;
        let (_, y) = place(area, 0.0, star.y);

        for offset in 0..=TAIL_LENGTH as i32 {
            let x = head - offset;
            if x < 0 || x >= area.width as i32 {
                continue;
            }
            let (glyph, modifier) = if offset == 0 {
                ("━", Modifier::BOLD)
            } else {
                ("─", Modifier::DIM)
            };
            if let Some(cell) = buf.cell_mut((area.x + x as u16, y)) {
                cell.set_symbol(glyph)
                    .set_style(Style::default().fg(theme.star_color).add_modifier(modifier));
            }
        }
    }
}

fn place(area: Rect, fx: f32, fy: f32) -> (u16, u16) {
    let x = area.x + ((fx * area.width as f32) as u16).min(area.width - 1);
    let y = area.y + ((fy * area.height as f32) as u16).min(area.height - 1);
    (x, y)
}

/// Brightness in 0..=1
fn twinkle(star: &Star, t: f32) -> f32 {
    0.5 + 0.5 * (TAU * (t - star.phase) / star.period).sin()
}

/// Fraction of the current crossing, or `None` before the first one starts
fn crossing_progress(star: &ShootingStar, t: f32) -> Option<f32> {
    if t < star.delay {
        return None;
    }
    Some(((t - star.delay) % star.duration) / star.duration)
}

/// Vertical gradient through the theme's three sky colours
fn paint_sky(buf: &mut Buffer, area: Rect, theme: &Theme) {
    let [top, middle, bottom] = theme.sky_gradient;
    let last = area.height.saturating_sub(1).max(1) as f32;
    for row in 0..area.height {
        let t = row as f32 / last;
        let color = if t < 0.5 {
            blend(top, middle, t * 2.0)
        } else {
            blend(middle, bottom, (t - 0.5) * 2.0)
        };
        buf.set_style(Rect::new(area.x, area.y + row, area.width, 1), Style::default().bg(color));
    }
}

/// Linear blend of two RGB colours; anything else keeps the first colour
fn blend(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => from,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::tui::THEME_REGISTRY;

    #[test]
    fn test_random_parameters_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = Starfield::new(200, 20, &mut rng);

        assert_eq!(field.star_count(), 200);
        for star in &field.stars {
            assert!((2.0..3.9).contains(&star.period));
            assert!(star.phase <= 0.0 && star.phase > -star.period);
        }
        for star in &field.shooting {
            assert!((5.0..9.0).contains(&star.duration));
            assert!((0.0..50.0).contains(&star.delay));
        }
    }

    #[test]
    fn test_shooting_star_waits_for_delay_then_loops() {
        let star = ShootingStar {
            y: 0.1,
            duration: 5.0,
            delay: 10.0,
        };
        assert_eq!(crossing_progress(&star, 9.0), None);
        assert_eq!(crossing_progress(&star, 10.0), Some(0.0));
        let halfway = crossing_progress(&star, 12.5).unwrap();
        assert!((halfway - 0.5).abs() < 1e-4);
        let looped = crossing_progress(&star, 16.0).unwrap();
        assert!((looped - 0.2).abs() < 1e-4);
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(Color::Reset, b, 0.5), Color::Reset);
    }

    #[test]
    fn test_render_stays_inside_area() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = Starfield::new(50, 5, &mut rng);
        let theme = THEME_REGISTRY.get_or_default("midnight");
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 10));
        let area = Rect::new(5, 2, 20, 5);

        field.render(&mut buf, area, theme, Duration::from_secs(30));

        for y in 0..10 {
            for x in 0..40 {
                if area.contains((x, y).into()) {
                    continue;
                }
                assert_eq!(buf[(x, y)].symbol(), " ");
            }
        }
    }
}
