//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{display_color, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Session-level numbers the core snapshot does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView {
    pub elapsed_secs: u32,
    pub high_score: u32,
}

/// Screen position of the board frame for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub start_x: u16,
    pub start_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for the falling-block game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Where the bordered board lands, centered in `viewport`.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        BoardLayout {
            start_x: viewport.width.saturating_sub(frame_w) / 2,
            start_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Render the current state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let BoardLayout {
            start_x,
            start_y,
            frame_w,
            frame_h,
        } = layout;

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            bg,
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                match snap.cell(x as usize, y as usize) {
                    Some(kind) => self.draw_block(fb, layout, x, y, kind),
                    None => self.draw_empty_cell(fb, layout, x, y),
                }
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                // Rows above the top edge are not drawn.
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_block(fb, layout, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, layout);

        match snap.phase {
            GamePhase::Idle => {
                draw_overlay_text(fb, layout, 0, "PRESS ENTER");
            }
            GamePhase::GameOver => {
                draw_overlay_text(fb, layout, 0, "GAME OVER");
                draw_overlay_number(fb, layout, 2, snap.score);
            }
            GamePhase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, layout: BoardLayout, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.fill_cell_rect(fb, layout, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: BoardLayout, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(Rgb::from_hex(display_color(kind)), PLAY_BG).bold();
        self.fill_cell_rect(fb, layout, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.start_x + 1 + cell_x * self.cell_w;
        let py = layout.start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView,
        viewport: Viewport,
        layout: BoardLayout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "TIME", label);
        fb.put_clock(panel_x, y + 1, hud.elapsed_secs, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "BEST", label);
        fb.put_u32(panel_x, y + 1, hud.high_score.max(snap.score), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y = y.saturating_add(3);

        if let Some(active) = snap.active {
            let swatch = CellStyle::new(Rgb::from_hex(display_color(active.kind)), PANEL_BG);
            fb.put_str(panel_x, y, "PIECE", label);
            fb.put_str(panel_x, y + 1, active.kind.as_str(), swatch.bold());
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn overlay_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold()
}

fn draw_overlay_text(fb: &mut FrameBuffer, layout: BoardLayout, row_offset: u16, text: &str) {
    let y = layout.start_y.saturating_add(layout.frame_h / 2 + row_offset);
    let text_w = text.chars().count() as u16;
    let x = layout
        .start_x
        .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, overlay_style());
}

fn draw_overlay_number(fb: &mut FrameBuffer, layout: BoardLayout, row_offset: u16, value: u32) {
    let y = layout.start_y.saturating_add(layout.frame_h / 2 + row_offset);
    let width = digit_count(value);
    let x = layout
        .start_x
        .saturating_add(layout.frame_w.saturating_sub(width) / 2);
    fb.put_u32(x, y, value, overlay_style());
}

fn digit_count(mut value: u32) -> u16 {
    let mut n = 1;
    while value >= 10 {
        value /= 10;
        n += 1;
    }
    n
}
