/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable render
/// snapshot.  No game logic is performed; this module only maps world
/// pixels onto terminal cells and translates the snapshot into terminal
/// commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use highway_dodge::entities::{Rect, RenderSnapshot, Rgba, Session};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_GRASS: Color = Color::DarkGreen;
const C_ROAD_EDGE: Color = Color::Yellow;
const C_LANE_LINE: Color = Color::White;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_BEST: Color = Color::White;
const C_HUD_SPEED: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Rows of the dashed lane line pattern (dash, dash, gap).
const DASH_PERIOD: i32 = 3;

// ── World → terminal mapping ──────────────────────────────────────────────────

/// Maps world pixels onto the play area: row 0 is the HUD and the last row
/// holds the controls hint.
struct Viewport {
    cols: i32,
    rows: i32,
    world_w: i32,
    world_h: i32,
}

impl Viewport {
    fn new(width: u16, height: u16, snap: &RenderSnapshot) -> Self {
        Self {
            cols: width as i32,
            rows: (height as i32 - 2).max(1),
            world_w: snap.screen_width.max(1),
            world_h: snap.screen_height.max(1),
        }
    }

    fn col(&self, x: f64) -> i32 {
        (x * self.cols as f64 / self.world_w as f64).floor() as i32
    }

    fn row(&self, y: f64) -> i32 {
        1 + (y * self.rows as f64 / self.world_h as f64).floor() as i32
    }

    fn in_play_area(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.cols && row >= 1 && row <= self.rows
    }
}

fn rgb(c: Rgba) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snap: &RenderSnapshot) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport::new(width, height, snap);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_road(out, &view, snap)?;
    for obstacle in &snap.obstacles {
        fill_rect(out, &view, &obstacle.bounds, rgb(obstacle.color), '█')?;
    }
    draw_player(out, &view, snap)?;

    if snap.session == Session::Exploding {
        draw_particles(out, &view, snap)?;
    }

    draw_hud(out, width, snap)?;
    draw_controls_hint(out, height)?;

    if snap.session == Session::GameOver {
        draw_game_over(out, width, height, snap)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Road ──────────────────────────────────────────────────────────────────────

fn draw_road<W: Write>(
    out: &mut W,
    view: &Viewport,
    snap: &RenderSnapshot,
) -> std::io::Result<()> {
    let left = view.col(snap.road_left as f64);
    let right = view.col(snap.road_right as f64);

    // Grass verges
    out.queue(style::SetForegroundColor(C_GRASS))?;
    for row in 1..=view.rows {
        out.queue(cursor::MoveTo(0, row as u16))?;
        out.queue(Print("░".repeat((left - 1).max(0) as usize)))?;
        if right + 1 < view.cols {
            out.queue(cursor::MoveTo((right + 1) as u16, row as u16))?;
            out.queue(Print("░".repeat((view.cols - right - 1) as usize)))?;
        }
    }

    // Yellow shoulders
    out.queue(style::SetForegroundColor(C_ROAD_EDGE))?;
    for row in 1..=view.rows {
        if left > 0 {
            out.queue(cursor::MoveTo((left - 1) as u16, row as u16))?;
            out.queue(Print("▐"))?;
        }
        if right < view.cols {
            out.queue(cursor::MoveTo(right as u16, row as u16))?;
            out.queue(Print("▌"))?;
        }
    }

    // Dashed lane dividers, scrolled by the frame counter
    let lane_width = (snap.road_right - snap.road_left) / snap.lane_count.max(1) as i32;
    let offset = (snap.frame / 4 % DASH_PERIOD as u64) as i32;
    out.queue(style::SetForegroundColor(C_LANE_LINE))?;
    for lane in 1..snap.lane_count as i32 {
        let col = view.col((snap.road_left + lane * lane_width) as f64);
        for row in 1..=view.rows {
            if (row - offset).rem_euclid(DASH_PERIOD) != 0 {
                out.queue(cursor::MoveTo(col as u16, row as u16))?;
                out.queue(Print("¦"))?;
            }
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Fill the cells covered by `rect`, clipped to the play area.
fn fill_rect<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    color: Color,
    glyph: char,
) -> std::io::Result<()> {
    let c0 = view.col(rect.x as f64);
    let c1 = view.col((rect.x + rect.width) as f64).max(c0 + 1);
    let r0 = view.row(rect.y as f64);
    let r1 = view.row((rect.y + rect.height) as f64).max(r0 + 1);

    out.queue(style::SetForegroundColor(color))?;
    for row in r0..r1 {
        for col in c0..c1 {
            if view.in_play_area(col, row) {
                out.queue(cursor::MoveTo(col as u16, row as u16))?;
                out.queue(Print(glyph))?;
            }
        }
    }
    Ok(())
}

fn draw_player<W: Write>(
    out: &mut W,
    view: &Viewport,
    snap: &RenderSnapshot,
) -> std::io::Result<()> {
    let color = rgb(highway_dodge::entities::PLAYER_COLOR);
    fill_rect(out, view, &snap.player, color, '█')?;

    // Headlights on the top row
    let top = view.row(snap.player.y as f64);
    let c0 = view.col(snap.player.x as f64);
    let c1 = view.col((snap.player.x + snap.player.width) as f64) - 1;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    for col in [c0, c1] {
        if view.in_play_area(col, top) {
            out.queue(cursor::MoveTo(col as u16, top as u16))?;
            out.queue(Print("▀"))?;
        }
    }
    Ok(())
}

fn draw_particles<W: Write>(
    out: &mut W,
    view: &Viewport,
    snap: &RenderSnapshot,
) -> std::io::Result<()> {
    for p in &snap.particles {
        let col = view.col(p.x);
        let row = view.row(p.y);
        if !view.in_play_area(col, row) {
            continue;
        }
        // Glyph weight follows the fade
        let glyph = if p.alpha > 0.66 {
            '@'
        } else if p.alpha > 0.33 {
            '*'
        } else {
            '.'
        };
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(style::SetForegroundColor(rgb(p.color)))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, width: u16, snap: &RenderSnapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("SCORE: {:>6}", snap.score)))?;
    out.queue(style::SetForegroundColor(C_HUD_BEST))?;
    out.queue(Print(format!("   HIGH SCORE: {:>6}", snap.high_score)))?;
    out.queue(Print(format!("   SPEED: {:>2}", snap.speed)))?;

    // Speedometer — right
    const BAR: usize = 10;
    let filled = ((snap.speed_fraction * BAR as f64).round() as usize).min(BAR);
    let gauge = format!("SPD [{}{}]", "█".repeat(filled), " ".repeat(BAR - filled));
    let gx = width.saturating_sub(gauge.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(gx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SPEED))?;
    out.queue(Print(&gauge))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Steer   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    width: u16,
    height: u16,
    snap: &RenderSnapshot,
) -> std::io::Result<()> {
    let new_best = snap.new_high_score;
    let score_line = format!("Final Score: {:>6}", snap.score);
    let best_line = if new_best {
        format!("★ NEW BEST: {:>6} ★", snap.high_score)
    } else {
        format!("High Score:  {:>6}", snap.high_score)
    };
    let stars = (0..5)
        .map(|i| if i < snap.stars { "★" } else { "☆" })
        .collect::<Vec<_>>()
        .join(" ");
    let hint = "SPACE / R - Play Again   Q - Quit";

    let lines: [(&str, Color); 6] = [
        ("╔════════════════════╗", Color::Red),
        ("║     GAME  OVER     ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (score_line.as_str(), Color::White),
        (best_line.as_str(), if new_best { Color::Yellow } else { Color::DarkGrey }),
        (stars.as_str(), Color::Yellow),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub((lines.len() as u16 + 2) / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let hint_row = start_row + lines.len() as u16 + 1;
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, hint_row))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
