//! Absolute positioning from per-child edge offsets.

use trellis_geometry::Rect;
use trellis_ui_layout::{
    commit, AxisAnchor, Container, Diagnostics, EdgeId, GuideChecker, GuideLevel, Interpolator,
    LayoutChild, LayoutDiagnostic, LayoutPolicy, LayoutResult, LayoutSize, Offset, Orientation,
    Sandbox, SandboxError, SizeGuide,
};

use super::{inner_length, with_extent};

/// Places every child by its own anchors, independently of its siblings.
///
/// Per axis a child may give a leading offset, a trailing offset and a
/// size. Leading offsets count from the leading container edge and
/// trailing ones from the trailing edge unless flagged as measured from the
/// far edge. Whatever is left open comes from the child's guide: with one
/// offset the size is interpolated between `Min` and `Max` against the room
/// up to the far edge, with none the child sits at the leading edge at its
/// preferred size. A child giving both offsets and a size keeps its leading
/// offset and size; the trailing offset only counts toward the container's
/// own guide. The horizontal axis is solved first; the vertical guide then
/// sees the resolved width.
///
/// A missing size is interpolated once, against the room measured from the
/// given offset to the edge it faces, whichever edge that offset counts
/// from. Nothing shrinks the child a second time, so the ladder is always
/// walked upward from `Min`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AbsoluteLayout;

impl AbsoluteLayout {
    pub fn new() -> Self {
        Self
    }
}

struct AxisInput<'a> {
    index: usize,
    orientation: Orientation,
    anchor: &'a AxisAnchor,
    guide: &'a dyn SizeGuide,
    length: i32,
    cross_size: i32,
    cross_is_max: bool,
}

impl AxisInput<'_> {
    fn guided_size(
        &self,
        interpolator: Interpolator,
        room: i32,
        diagnostics: &dyn Diagnostics,
    ) -> i32 {
        GuideChecker::new(self.cross_size, self.cross_is_max, diagnostics)
            .with_guides([(self.index, self.guide)])
            .resolve(interpolator, room.max(0) as i64)
            .first()
            .copied()
            .unwrap_or(0)
    }

    /// Room between a single given offset and the edge it points away from.
    fn room(&self) -> i32 {
        let length = self.length;
        let room = match (self.anchor.lead, self.anchor.trail) {
            (Some(lead), None) => {
                let distance = lead.distance.resolve(length);
                if lead.from_far_edge {
                    distance
                } else {
                    length - distance
                }
            }
            (None, Some(trail)) => {
                let distance = trail.distance.resolve(length);
                if trail.from_far_edge {
                    distance
                } else {
                    length - distance
                }
            }
            _ => length,
        };
        room.max(0)
    }

    /// Size used when the anchors cannot be solved.
    fn fallback_size(&self) -> i32 {
        match self.anchor.size {
            Some(size) => size.resolve(self.length),
            None => self
                .guide
                .get(GuideLevel::Preferred, self.cross_size, self.cross_is_max),
        }
        .max(0)
    }
}

fn lead_space(sandbox: &mut Sandbox, offset: Offset, edge: EdgeId) -> Result<(), SandboxError> {
    if offset.from_far_edge {
        sandbox.add_space(edge, offset.distance, Sandbox::CONTAINER_RIGHT)?;
    } else {
        sandbox.add_space(Sandbox::CONTAINER_LEFT, offset.distance, edge)?;
    }
    Ok(())
}

fn trail_space(sandbox: &mut Sandbox, offset: Offset, edge: EdgeId) -> Result<(), SandboxError> {
    if offset.from_far_edge {
        sandbox.add_space(Sandbox::CONTAINER_LEFT, offset.distance, edge)?;
    } else {
        sandbox.add_space(edge, offset.distance, Sandbox::CONTAINER_RIGHT)?;
    }
    Ok(())
}

/// Adds the child's anchors to `sandbox` as spaces between `lead` and
/// `trail`. Open sizes are filled in from the guide.
fn constrain(
    sandbox: &mut Sandbox,
    input: &AxisInput<'_>,
    lead: EdgeId,
    trail: EdgeId,
    diagnostics: &dyn Diagnostics,
) -> Result<(), SandboxError> {
    let anchor = input.anchor;
    match anchor.lead {
        Some(offset) => lead_space(sandbox, offset, lead)?,
        None if anchor.trail.is_none() => {
            sandbox.add_space(Sandbox::CONTAINER_LEFT, LayoutSize::ZERO, lead)?;
        }
        None => {}
    }
    // A lead and a size already fix the trailing edge.
    let trail_is_fixed = anchor.lead.is_some() && anchor.size.is_some();
    if let Some(offset) = anchor.trail.filter(|_| !trail_is_fixed) {
        trail_space(sandbox, offset, trail)?;
    }

    let size = match (anchor.size, anchor.lead, anchor.trail) {
        (Some(size), _, _) => Some(size),
        (None, Some(_), Some(_)) => None,
        (None, None, None) => Some(LayoutSize::px(input.guided_size(
            Interpolator::MIN_PREFERRED,
            input.length,
            diagnostics,
        ))),
        (None, _, _) => Some(LayoutSize::px(input.guided_size(
            Interpolator::MIN_MAX,
            input.room(),
            diagnostics,
        ))),
    };
    if let Some(size) = size {
        sandbox.add_space(lead, size, trail)?;
    }
    Ok(())
}

/// Builds and solves the sandbox for one child on one axis. Returns the
/// leading position and the extent, both relative to the content area.
fn solve_axis(input: &AxisInput<'_>, diagnostics: &dyn Diagnostics) -> (i32, i32) {
    let mut sandbox = Sandbox::new(input.length);
    let lead = sandbox.add_edge();
    let trail = sandbox.add_edge();

    let resolved = constrain(&mut sandbox, input, lead, trail, diagnostics)
        .and_then(|()| sandbox.resolve());
    match resolved {
        Ok(resolution) => {
            if !resolution.is_fully_resolved() {
                diagnostics.report(LayoutDiagnostic::UnresolvedEdge {
                    index: input.index,
                    orientation: input.orientation,
                });
            }
            let start = resolution.position(lead);
            let extent = (resolution.position(trail) - start).max(0);
            (start, extent)
        }
        Err(error) => {
            log::debug!(
                "absolute: child {} {:?} anchors: {error}",
                input.index,
                input.orientation
            );
            let diagnostic = match error {
                SandboxError::Cycle { .. } => LayoutDiagnostic::SandboxCycle {
                    index: input.index,
                    orientation: input.orientation,
                },
                _ => LayoutDiagnostic::InvalidAnchor {
                    index: input.index,
                    orientation: input.orientation,
                },
            };
            diagnostics.report(diagnostic);
            (0, input.fallback_size())
        }
    }
}

impl LayoutPolicy for AbsoluteLayout {
    fn sizer<'a>(
        &'a self,
        container: &'a Container,
        children: &'a [Box<dyn LayoutChild>],
        orientation: Orientation,
    ) -> Box<dyn SizeGuide + 'a> {
        Box::new(AbsoluteSizer {
            container,
            children,
            orientation,
        })
    }

    fn layout(
        &mut self,
        container: &Container,
        children: &[Box<dyn LayoutChild>],
        diagnostics: &dyn Diagnostics,
    ) -> LayoutResult {
        let content = container.content_rect();
        let bounds: Vec<Rect> = children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                let attributes = child.attributes();
                let (x, width) = solve_axis(
                    &AxisInput {
                        index,
                        orientation: Orientation::Horizontal,
                        anchor: &attributes.horizontal,
                        guide: child.guide(Orientation::Horizontal),
                        length: content.width,
                        cross_size: content.height,
                        cross_is_max: true,
                    },
                    diagnostics,
                );
                let (y, height) = solve_axis(
                    &AxisInput {
                        index,
                        orientation: Orientation::Vertical,
                        anchor: &attributes.vertical,
                        guide: child.guide(Orientation::Vertical),
                        length: content.height,
                        cross_size: width,
                        cross_is_max: false,
                    },
                    diagnostics,
                );
                Rect::new(content.x + x, content.y + y, width, height)
            })
            .collect();

        commit(children, bounds)
    }

    fn debug_name(&self) -> &str {
        "AbsoluteLayout"
    }
}

/// Guide of an absolutely positioned container: the furthest reaching
/// child, counting pixel offsets on both sides, plus the margins.
pub struct AbsoluteSizer<'a> {
    container: &'a Container,
    children: &'a [Box<dyn LayoutChild>],
    orientation: Orientation,
}

impl SizeGuide for AbsoluteSizer<'_> {
    fn get(&self, level: GuideLevel, cross_size: i32, cross_is_max: bool) -> i32 {
        let inner_cross = inner_length(
            cross_size,
            self.container.margin_extent(self.orientation.opposite()),
        );
        let extent = self
            .children
            .iter()
            .map(|child| {
                let attributes = child.attributes();
                let anchor = attributes.anchor(self.orientation);
                let size = match anchor.size {
                    Some(size) if size.is_pixel_exact() => size.pixels.max(0),
                    _ => child
                        .guide(self.orientation)
                        .get(level, inner_cross, cross_is_max)
                        .max(0),
                };
                let offsets = [anchor.lead, anchor.trail]
                    .into_iter()
                    .flatten()
                    .map(|offset| offset.distance.pixels.max(0) as i64)
                    .sum::<i64>();
                with_extent(size, offsets)
            })
            .max()
            .unwrap_or(0);

        with_extent(extent, self.container.margin_extent(self.orientation) as i64)
    }
}

#[cfg(test)]
#[path = "tests/absolute_tests.rs"]
mod tests;
