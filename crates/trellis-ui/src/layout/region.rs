//! Region anchoring: children docked against the container edges around an
//! optional center child.

use smallvec::SmallVec;
use trellis_geometry::Rect;
use trellis_ui_layout::{
    commit, saturating_extent, AxisEnd, Container, Diagnostics, GuideChecker, GuideLevel,
    Interpolator, LayoutChild, LayoutDiagnostic, LayoutPolicy, LayoutResult, Orientation, Region,
    SizeGuide, Sizes,
};

use super::{inner_length, with_extent};

/// Configuration for [`RegionLayout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionSpec {
    /// Region assumed for children that do not name one.
    pub default_region: Region,
}

impl Default for RegionSpec {
    fn default() -> Self {
        Self {
            default_region: Region::Center,
        }
    }
}

impl RegionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_region(mut self, region: Region) -> Self {
        self.default_region = region;
        self
    }
}

/// How a child takes part in the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Role {
    Edge(Region),
    Center,
    /// A center child after the first one.
    Ignored,
}

struct Roles {
    roles: SmallVec<[Role; 8]>,
    center: Option<usize>,
}

impl Roles {
    fn classify(
        spec: &RegionSpec,
        children: &[Box<dyn LayoutChild>],
        diagnostics: Option<&dyn Diagnostics>,
    ) -> Self {
        let mut center = None;
        let roles = children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                let region = child.attributes().region.unwrap_or(spec.default_region);
                if !region.is_center() {
                    return Role::Edge(region);
                }
                match center {
                    None => {
                        center = Some(index);
                        Role::Center
                    }
                    Some(first) => {
                        if let Some(diagnostics) = diagnostics {
                            diagnostics.report(LayoutDiagnostic::DuplicateCenter { index, first });
                        }
                        Role::Ignored
                    }
                }
            })
            .collect();
        Self { roles, center }
    }

    /// True if something still gets placed after edge child `index`, so a
    /// gap separates it from the rest. The center is always placed last.
    fn followed(&self, index: usize) -> bool {
        self.center.is_some()
            || self.roles[index + 1..]
                .iter()
                .any(|role| matches!(role, Role::Edge(_)))
    }

    /// Children sized along `orientation`: its edge children plus the
    /// center, in child order.
    fn chain(&self, orientation: Orientation) -> SmallVec<[usize; 8]> {
        self.roles
            .iter()
            .enumerate()
            .filter(|(_, role)| match role {
                Role::Edge(region) => region.orientation() == Some(orientation),
                Role::Center => true,
                Role::Ignored => false,
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Gaps consumed along `orientation` by its edge children.
    fn chain_gaps(&self, orientation: Orientation, gap: i32) -> i64 {
        self.roles
            .iter()
            .enumerate()
            .filter(|(index, role)| {
                matches!(role, Role::Edge(region) if region.orientation() == Some(orientation))
                    && self.followed(*index)
            })
            .count() as i64
            * gap as i64
    }
}

/// Docks edge children against the container and gives the center child
/// what remains.
///
/// Edge children are taken in child order; each peels a slice off the
/// remaining area along its own axis and spans that area across it. The
/// widths of the left/right children and the center (and the heights of
/// the top/bottom children and the center) are interpolated together
/// between `Min` and `Preferred`. Only the first center child is placed;
/// further ones are reported and get an empty rectangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionLayout {
    spec: RegionSpec,
}

impl RegionLayout {
    pub fn new(spec: RegionSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &RegionSpec {
        &self.spec
    }
}

fn chain_sizes(
    roles: &Roles,
    children: &[Box<dyn LayoutChild>],
    container: &Container,
    orientation: Orientation,
    diagnostics: &dyn Diagnostics,
) -> (SmallVec<[usize; 8]>, Sizes) {
    let content = container.content_rect();
    let length = orientation.length(content.size());
    let cross_length = orientation.opposite().length(content.size());
    let chain = roles.chain(orientation);
    let sizes = GuideChecker::new(cross_length, true, diagnostics)
        .with_guides(
            chain
                .iter()
                .map(|&index| (index, children[index].guide(orientation))),
        )
        .with_fixed_extent(roles.chain_gaps(orientation, container.gap(orientation)))
        .resolve(Interpolator::MIN_PREFERRED, length as i64);
    (chain, sizes)
}

fn size_of(chain: &[usize], sizes: &Sizes, index: usize) -> i32 {
    chain
        .iter()
        .position(|&member| member == index)
        .and_then(|position| sizes.get(position).copied())
        .unwrap_or(0)
}

impl LayoutPolicy for RegionLayout {
    fn sizer<'a>(
        &'a self,
        container: &'a Container,
        children: &'a [Box<dyn LayoutChild>],
        orientation: Orientation,
    ) -> Box<dyn SizeGuide + 'a> {
        Box::new(RegionSizer {
            spec: &self.spec,
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
        let roles = Roles::classify(&self.spec, children, Some(diagnostics));
        let (widths_chain, widths) =
            chain_sizes(&roles, children, container, Orientation::Horizontal, diagnostics);
        let (heights_chain, heights) =
            chain_sizes(&roles, children, container, Orientation::Vertical, diagnostics);

        let content = container.content_rect();
        let mut remaining = content;
        let mut bounds = vec![Rect::ZERO; children.len()];

        for (index, role) in roles.roles.iter().enumerate() {
            let Role::Edge(region) = *role else {
                continue;
            };
            let (Some(axis), Some(end)) = (region.orientation(), region.end()) else {
                continue;
            };
            let wanted = match axis {
                Orientation::Horizontal => size_of(&widths_chain, &widths, index),
                Orientation::Vertical => size_of(&heights_chain, &heights, index),
            };

            let (start, length) = axis.span(remaining);
            let (cross_start, cross_length) = axis.opposite().span(remaining);
            let size = wanted.clamp(0, length);
            let position = match end {
                AxisEnd::Leading => start,
                AxisEnd::Trailing => start + length - size,
            };
            bounds[index] = axis.rect(position, cross_start, size, cross_length);

            let gap = if roles.followed(index) {
                container.gap(axis)
            } else {
                0
            };
            let consumed = size.saturating_add(gap).min(length);
            let rest_start = match end {
                AxisEnd::Leading => start + consumed,
                AxisEnd::Trailing => start,
            };
            remaining = axis.rect(rest_start, cross_start, length - consumed, cross_length);
        }

        if let Some(center) = roles.center {
            bounds[center] = remaining;
        }
        for (index, role) in roles.roles.iter().enumerate() {
            if *role == Role::Ignored {
                bounds[index] = Rect::new(content.x, content.y, 0, 0);
            }
        }

        commit(children, bounds)
    }

    fn debug_name(&self) -> &str {
        "RegionLayout"
    }
}

/// Guide of a region-anchored container.
///
/// Folds the children in reverse dock order: an edge child along the
/// queried axis adds its length (and a gap) to what it encloses, one across
/// it widens the result to its own length if larger.
pub struct RegionSizer<'a> {
    spec: &'a RegionSpec,
    container: &'a Container,
    children: &'a [Box<dyn LayoutChild>],
    orientation: Orientation,
}

impl SizeGuide for RegionSizer<'_> {
    fn get(&self, level: GuideLevel, cross_size: i32, cross_is_max: bool) -> i32 {
        let roles = Roles::classify(self.spec, self.children, None);
        let inner_cross = inner_length(
            cross_size,
            self.container.margin_extent(self.orientation.opposite()),
        );
        let gap = self.container.gap(self.orientation);
        let value = |index: usize| {
            self.children[index]
                .guide(self.orientation)
                .get(level, inner_cross, cross_is_max)
                .max(0)
        };

        let mut enclosed = roles.center.map(value);
        for (index, role) in roles.roles.iter().enumerate().rev() {
            let Role::Edge(region) = *role else {
                continue;
            };
            let own = value(index);
            enclosed = Some(match enclosed {
                None => own,
                Some(inner) if region.orientation() == Some(self.orientation) => {
                    saturating_extent(saturating_extent(own, gap), inner)
                }
                Some(inner) => own.max(inner),
            });
        }

        with_extent(
            enclosed.unwrap_or(0),
            self.container.margin_extent(self.orientation) as i64,
        )
    }
}

#[cfg(test)]
#[path = "tests/region_tests.rs"]
mod tests;
