// Copyright 2025 the Lintrans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vello rendering for Lintrans.
//!
//! Draws a [`Frame`] the way the visualizer presents it: a grid with the
//! original and transformed sprite on the left, and a sidebar with the Reset
//! button, the four matrix readouts and the list of controls on the right.

pub mod layout;
pub mod text;

use lintrans::{readout::MatrixReadout, Frame, Polygon};
use parley::{FontContext, LayoutContext, PositionedLayoutItem};
use vello::{
    kurbo::{Affine, Line, Point, Size, Stroke},
    peniko::{Color, Fill},
    Scene,
};

use crate::{
    layout::{Layout, CONTROLS_TOP, READOUT_TOPS},
    text::{AttachmentPoint, Label, TextStyle},
};

/// Colors used by the visualizer.
pub mod colors {
    use vello::peniko::{color::palette, Color};

    /// Window background.
    pub const BACKGROUND: Color = Color::from_rgb8(25, 25, 25);
    /// Grid lines.
    pub const GRID: Color = Color::from_rgb8(60, 60, 60);
    /// Sidebar background.
    pub const SIDEBAR: Color = Color::from_rgb8(35, 35, 35);
    /// Outline of the untransformed sprite.
    pub const ORIGINAL: Color = Color::from_rgb8(180, 80, 80);
    /// Outline of the transformed sprite.
    pub const TRANSFORMED: Color = Color::from_rgb8(100, 255, 255);
    /// Titles in the sidebar.
    pub const TITLE: Color = Color::from_rgb8(160, 200, 255);
    /// Body text and button border.
    pub const TEXT: Color = palette::css::WHITE;
    /// Button face.
    pub const BUTTON: Color = Color::from_rgb8(70, 70, 70);
}

/// Lines listed under "Controls:".
pub const CONTROLS: [&str; 6] = [
    "Arrow Keys: Rotate / Scale",
    "Q / E: Shear",
    "WASD: Move",
    "R: Reset",
    "",
    "Esc: Quit",
];

/// Caption of the Reset button.
pub const RESET_CAPTION: &str = "Reset (R)";

const OUTLINE_WIDTH: f64 = 2.0;

/// Expensive state for rendering.
#[derive(Default)]
#[allow(
    missing_debug_implementations,
    reason = "Not useful, and members don't implement Debug."
)]
pub struct Environment {
    /// Font context.
    ///
    /// This contains a font collection that is expensive to reproduce.
    pub(crate) font_cx: FontContext,
    /// Layout context.
    pub(crate) layout_cx: LayoutContext<Option<Color>>,
}

impl Environment {
    /// Add everything for one tick to a Vello [`Scene`].
    #[tracing::instrument(skip_all)]
    pub fn add_frame_to_scene(&mut self, scene: &mut Scene, layout: &Layout, frame: &Frame) {
        let size = layout.size();
        scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            colors::BACKGROUND,
            None,
            &size.to_rect(),
        );

        add_grid(scene, layout);
        scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            colors::SIDEBAR,
            None,
            &layout.sidebar(),
        );

        let origin = Affine::translate(layout.origin());
        add_outline(scene, origin, &frame.original, colors::ORIGINAL);
        add_outline(scene, origin, &frame.transformed, colors::TRANSFORMED);

        self.add_reset_button(scene, layout);

        let left = layout.sidebar_left();
        for (readout, top) in frame.matrices.readouts().iter().zip(READOUT_TOPS) {
            self.add_readout(scene, readout, Point::new(left, top));
        }

        self.add_controls(scene, Point::new(left, CONTROLS_TOP));

        tracing::trace!(width = size.width, height = size.height, "frame added");
    }

    fn add_reset_button(&mut self, scene: &mut Scene, layout: &Layout) {
        let button = layout.reset_button();
        scene.fill(Fill::NonZero, Affine::IDENTITY, colors::BUTTON, None, &button);
        scene.stroke(
            &Stroke::new(OUTLINE_WIDTH),
            Affine::IDENTITY,
            colors::TEXT,
            None,
            &button,
        );
        self.add_label(
            scene,
            &Label {
                text: RESET_CAPTION,
                style: TextStyle::Button,
                color: colors::TEXT,
                insertion: button.center(),
                attachment_point: AttachmentPoint::MiddleCenter,
            },
        );
    }

    fn add_readout(&mut self, scene: &mut Scene, readout: &MatrixReadout, at: Point) {
        self.add_label(
            scene,
            &Label {
                text: readout.title,
                style: TextStyle::Title,
                color: colors::TITLE,
                insertion: at,
                attachment_point: AttachmentPoint::TopLeft,
            },
        );
        let mut y = at.y + 32.0;
        for row in &readout.rows {
            self.add_label(
                scene,
                &Label {
                    text: row,
                    style: TextStyle::Body,
                    color: colors::TEXT,
                    insertion: Point::new(at.x, y),
                    attachment_point: AttachmentPoint::TopLeft,
                },
            );
            y += 24.0;
        }
    }

    fn add_controls(&mut self, scene: &mut Scene, at: Point) {
        self.add_label(
            scene,
            &Label {
                text: "Controls:",
                style: TextStyle::Title,
                color: colors::TITLE,
                insertion: at,
                attachment_point: AttachmentPoint::TopLeft,
            },
        );
        let mut y = at.y + 35.0;
        for line in CONTROLS {
            if !line.is_empty() {
                self.add_label(
                    scene,
                    &Label {
                        text: line,
                        style: TextStyle::Body,
                        color: colors::TEXT,
                        insertion: Point::new(at.x, y),
                        attachment_point: AttachmentPoint::TopLeft,
                    },
                );
            }
            y += 22.0;
        }
    }

    /// Lay out a [`Label`] with Parley and add its glyphs to the scene.
    pub fn add_label(&mut self, scene: &mut Scene, label: &Label<'_>) {
        let Self { font_cx, layout_cx } = self;

        let mut builder = layout_cx.ranged_builder(font_cx, label.text, 1.0, true);
        for prop in label.style.style_set().inner().values() {
            builder.push_default(prop.to_owned());
        }
        let mut text_layout = builder.build(label.text);
        text_layout.break_all_lines(None);
        text_layout.align(None, Default::default(), Default::default());
        let layout_size = Size {
            width: f64::from(text_layout.width()),
            height: f64::from(text_layout.height()),
        };

        let transform = Affine::translate(
            label.insertion.to_vec2() - label.attachment_point.select(layout_size),
        );

        for line in text_layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };

                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let synthesis = run.synthesis();
                scene
                    .draw_glyphs(run.font())
                    .brush(label.color)
                    .hint(false)
                    .transform(transform)
                    .glyph_transform(
                        synthesis
                            .skew()
                            .map(|angle| Affine::skew(f64::from(angle.to_radians().tan()), 0.0)),
                    )
                    .font_size(run.font_size())
                    .normalized_coords(run.normalized_coords())
                    .draw(
                        Fill::NonZero,
                        glyph_run.glyphs().map(|g| {
                            let gx = x + g.x;
                            let gy = y - g.y;
                            x += g.advance;
                            vello::Glyph {
                                id: g.id as _,
                                x: gx,
                                y: gy,
                            }
                        }),
                    );
            }
        }
    }
}

/// Grid lines over the demo area.
fn add_grid(scene: &mut Scene, layout: &Layout) {
    let stroke = Stroke::new(1.0);
    let area = layout.demo_area();
    for x in layout.grid_columns() {
        scene.stroke(
            &stroke,
            Affine::IDENTITY,
            colors::GRID,
            None,
            &Line::new((x, area.y0), (x, area.y1)),
        );
    }
    for y in layout.grid_rows() {
        scene.stroke(
            &stroke,
            Affine::IDENTITY,
            colors::GRID,
            None,
            &Line::new((area.x0, y), (area.x1, y)),
        );
    }
}

/// Closed outline of `polygon`, placed by `transform`.
fn add_outline(scene: &mut Scene, transform: Affine, polygon: &Polygon, color: Color) {
    scene.stroke(
        &Stroke::new(OUTLINE_WIDTH),
        transform,
        color,
        None,
        &polygon.to_bez_path(),
    );
}
