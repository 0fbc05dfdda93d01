//! Extent store - the ordered collection of brushed regions.
//!
//! Each [`Region`] holds both axes' pixel bounds and domain caches, so the
//! X and Y sequences can never fall out of step. The collection is never
//! empty: clearing or assigning an empty list leaves one `[0, 0]` placeholder.

use crate::error::{BrushError, BrushResult};
use crate::scale::ScaleAdapter;
use crate::types::{Axis, AxisPair, DomainExtent, DomainPair, Region, Span};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ExtentStore {
    regions: Vec<Region>,
}

impl Default for ExtentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtentStore {
    pub fn new() -> Self {
        Self {
            regions: vec![Region::DEGENERATE],
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Always false: the store keeps at least a placeholder region.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, index: usize) -> BrushResult<&Region> {
        self.regions.get(index).ok_or(BrushError::InvalidRegionIndex {
            index,
            len: self.regions.len(),
        })
    }

    /// Append a degenerate region and return its index.
    pub fn create_region(&mut self) -> usize {
        self.regions.push(Region::DEGENERATE);
        self.regions.len() - 1
    }

    /// Store new pixel bounds for one axis of a region, dropping that axis's
    /// domain cache.
    pub fn set_axis_extent(&mut self, axis: Axis, index: usize, low: f64, high: f64) -> BrushResult<()> {
        let len = self.regions.len();
        let region = self
            .regions
            .get_mut(index)
            .ok_or(BrushError::InvalidRegionIndex { index, len })?;
        region.pixels[axis] = Span::new(low, high);
        region.domain[axis] = None;
        Ok(())
    }

    /// Remove a region. The last remaining region is replaced by a placeholder.
    pub fn remove(&mut self, index: usize) -> BrushResult<Region> {
        if index >= self.regions.len() {
            return Err(BrushError::InvalidRegionIndex {
                index,
                len: self.regions.len(),
            });
        }
        let removed = self.regions.remove(index);
        if self.regions.is_empty() {
            self.regions.push(Region::DEGENERATE);
        }
        Ok(removed)
    }

    /// Reset to a single placeholder region with no domain cache.
    pub fn clear(&mut self) {
        self.regions.clear();
        self.regions.push(Region::DEGENERATE);
    }

    /// Replace one axis of the collection from domain-space pairs.
    ///
    /// The collection is resized to `pairs.len()`. When the other axis is
    /// unbound it is reset to placeholders; otherwise existing regions keep
    /// their other-axis bounds and new ones start degenerate. Nothing is
    /// changed if any pair fails to map.
    pub fn assign_domain(
        &mut self,
        axis: Axis,
        pairs: &[DomainPair],
        scale: &ScaleAdapter,
        other_bound: bool,
    ) -> BrushResult<()> {
        let spans = pairs
            .iter()
            .map(|&pair| scale.map_pair(pair))
            .collect::<BrushResult<Vec<_>>>()?;

        if spans.is_empty() {
            self.clear();
            return Ok(());
        }

        let other = axis.other();
        self.regions.resize(spans.len(), Region::DEGENERATE);
        for ((region, span), pair) in self.regions.iter_mut().zip(spans).zip(pairs) {
            region.pixels[axis] = span;
            region.domain[axis] = Some(*pair);
            if !other_bound {
                region.pixels[other] = Span::DEGENERATE;
                region.domain[other] = None;
            }
        }
        debug!(%axis, regions = self.regions.len(), "Assigned domain extents");
        Ok(())
    }

    /// Replace the whole collection. An empty list leaves one placeholder.
    pub fn assign_regions(&mut self, regions: Vec<Region>) {
        self.regions = regions;
        if self.regions.is_empty() {
            self.regions.push(Region::DEGENERATE);
        }
    }

    /// Domain view of one axis: cached pairs verbatim, otherwise inverted
    /// pixel bounds with zero-span entries dropped.
    pub fn read_domain(&self, axis: Axis, scale: &ScaleAdapter) -> BrushResult<Vec<DomainPair>> {
        let mut out = Vec::with_capacity(self.regions.len());
        for region in &self.regions {
            if let Some(pair) = domain_pair(region, axis, scale)? {
                out.push(pair);
            }
        }
        Ok(out)
    }

    /// Domain view of whole regions for the bound axes.
    ///
    /// A region is reported only if every bound axis yields a pair.
    pub fn read_domain_extents(&self, scales: &AxisPair<Option<ScaleAdapter>>) -> BrushResult<Vec<DomainExtent>> {
        let mut out = Vec::with_capacity(self.regions.len());
        'regions: for region in &self.regions {
            let mut pairs: AxisPair<Option<DomainPair>> = AxisPair::default();
            for axis in Axis::ALL {
                if let Some(scale) = &scales[axis] {
                    match domain_pair(region, axis, scale)? {
                        Some(pair) => pairs[axis] = Some(pair),
                        None => continue 'regions,
                    }
                }
            }
            if let Some(extent) = DomainExtent::from_pairs(pairs.x, pairs.y) {
                out.push(extent);
            }
        }
        Ok(out)
    }

    /// Whether a region is empty on any bound axis.
    pub fn is_region_empty(&self, index: usize, bound: AxisPair<bool>) -> BrushResult<bool> {
        Ok(self.region(index)?.is_empty(bound))
    }
}

fn domain_pair(region: &Region, axis: Axis, scale: &ScaleAdapter) -> BrushResult<Option<DomainPair>> {
    if let Some(cached) = region.domain[axis] {
        return Ok(Some(cached));
    }
    // Empty spans are never reported; skip the inverse so strict scales are not asked.
    if region.pixels[axis].is_degenerate() {
        return Ok(None);
    }
    let pair = scale.invert_span(region.pixels[axis])?;
    if pair[1] - pair[0] == 0.0 {
        return Ok(None);
    }
    Ok(Some(pair))
}
