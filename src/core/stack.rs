// Scroll-driven card stacking engine.
//
// Pure math and state: the engine consumes a freshly-measured LayoutSample
// each tick and emits per-item transform updates filtered by change
// detection, plus an edge-triggered "stack complete" signal. DOM discovery,
// style writes and frame scheduling live in the web adapter, which keeps
// this module testable on the host toolchain.

/// A configuration threshold, in absolute pixels or as a percentage of the
/// live viewport/container extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    /// Resolve against the current extent. Percentages are re-resolved on
    /// every tick so they track resizes.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Length::Px(px) => px,
            Length::Percent(pct) => extent * (pct / 100.0),
        }
    }

    /// Parse `"25%"`, `"120"` or `"120px"`. Returns `None` on anything
    /// malformed so the caller can fall back to the field default.
    pub fn parse(raw: &str) -> Option<Length> {
        let s = raw.trim();
        if let Some(pct) = s.strip_suffix('%') {
            return pct
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Length::Percent);
        }
        let s = s.strip_suffix("px").unwrap_or(s);
        s.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Length::Px)
    }
}

/// Immutable engine configuration. Every field is independently defaultable;
/// malformed declarative values fall back per field.
#[derive(Clone, Debug)]
pub struct StackConfig {
    /// Vertical spacing applied between items at setup, px.
    pub item_distance: f64,
    /// Per-index scale increment on top of `base_scale`.
    pub item_scale: f64,
    /// Per-index stagger of the trigger/pin thresholds, px.
    pub item_stack_distance: f64,
    /// Where an item pins, measured down from the top of the extent.
    pub stack_position: Length,
    /// Where the scale interpolation finishes.
    pub scale_end_position: Length,
    /// Scale of item 0 at full progress.
    pub base_scale: f64,
    /// Per-index rotation at full progress, degrees. 0 disables rotation.
    pub rotation_amount: f64,
    /// Depth-of-field blur per level below the topmost active item, px.
    /// 0 disables blur.
    pub blur_amount: f64,
    /// Sample the window scroll signal instead of the container's own.
    pub use_window_scroll: bool,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            item_distance: 100.0,
            item_scale: 0.03,
            item_stack_distance: 30.0,
            stack_position: Length::Percent(20.0),
            scale_end_position: Length::Percent(10.0),
            base_scale: 0.85,
            rotation_amount: 0.0,
            blur_amount: 0.0,
            use_window_scroll: false,
        }
    }
}

/// Rounded transform values, compared against the previously applied set to
/// suppress redundant visual writes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformSnapshot {
    pub translate_y: f64,
    pub scale: f64,
    pub rotation: f64,
    pub blur: f64,
}

impl TransformSnapshot {
    fn rounded(translate_y: f64, scale: f64, rotation: f64, blur: f64) -> Self {
        Self {
            translate_y: round_to(translate_y, 100.0),
            scale: round_to(scale, 1000.0),
            rotation: round_to(rotation, 100.0),
            blur: round_to(blur, 100.0),
        }
    }

    /// Write tolerances: 0.1 for translate/rotation/blur, 0.001 for scale.
    fn differs_from(&self, prev: &TransformSnapshot) -> bool {
        (self.translate_y - prev.translate_y).abs() > 0.1
            || (self.scale - prev.scale).abs() > 0.001
            || (self.rotation - prev.rotation).abs() > 0.1
            || (self.blur - prev.blur).abs() > 0.1
    }
}

#[inline]
fn round_to(v: f64, factor: f64) -> f64 {
    (v * factor).round() / factor
}

/// Per-tick inputs, sampled fresh from the scroll space in effect.
///
/// `item_tops` are absolute top offsets in that scroll space, in item order.
/// `end_marker_top` is the offset of the designated end marker; without one
/// the engine falls back to the last item's offset plus one extent.
#[derive(Clone, Debug, Default)]
pub struct LayoutSample {
    pub offset: f64,
    pub extent: f64,
    pub item_tops: Vec<f64>,
    pub end_marker_top: Option<f64>,
}

/// One item's freshly-computed transform, emitted only when it moved beyond
/// the write tolerances.
#[derive(Clone, Copy, Debug)]
pub struct ItemUpdate {
    pub index: usize,
    pub transform: TransformSnapshot,
}

/// Completion edge crossed during a pass, if any. `Entered` means the last
/// item's pin window just captured the scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionEdge {
    Entered,
    Exited,
}

struct ItemRecord {
    last: Option<TransformSnapshot>,
}

pub struct StackEngine {
    config: StackConfig,
    items: Vec<ItemRecord>,
    complete: bool,
}

impl StackEngine {
    pub fn new(config: StackConfig, item_count: usize) -> Self {
        let items = (0..item_count).map(|_| ItemRecord { last: None }).collect();
        Self {
            config,
            items,
            complete: false,
        }
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Run one full pass over all items in ascending index order.
    ///
    /// Updates that cleared the write tolerances are pushed into `updates`
    /// (not cleared here; the caller owns the buffer). Returns the completion
    /// edge crossed during this pass, if any.
    pub fn compute(
        &mut self,
        sample: &LayoutSample,
        updates: &mut Vec<ItemUpdate>,
    ) -> Option<CompletionEdge> {
        let n = self.items.len().min(sample.item_tops.len());
        if n == 0 {
            return None;
        }

        let cfg = &self.config;
        let extent = sample.extent;
        let stack_offset = cfg.stack_position.resolve(extent);
        let scale_end_offset = cfg.scale_end_position.resolve(extent);
        let end_top = sample
            .end_marker_top
            .unwrap_or(sample.item_tops[n - 1] + extent);
        let pin_end = end_top - extent / 2.0;

        // Topmost active item: highest index whose trigger threshold has
        // been reached. Everything below it picks up depth blur.
        let mut top_index = 0usize;
        for (j, &top) in sample.item_tops.iter().take(n).enumerate() {
            let trigger = top - stack_offset - cfg.item_stack_distance * j as f64;
            if sample.offset >= trigger {
                top_index = j;
            }
        }

        let mut edge = None;
        for i in 0..n {
            let item_top = sample.item_tops[i];
            let stagger = cfg.item_stack_distance * i as f64;
            let trigger_start = item_top - stack_offset - stagger;
            let trigger_end = item_top - scale_end_offset;
            let progress = progress_between(sample.offset, trigger_start, trigger_end);

            let target_scale = cfg.base_scale + i as f64 * cfg.item_scale;
            let scale = 1.0 - progress * (1.0 - target_scale);
            let rotation = if cfg.rotation_amount != 0.0 {
                i as f64 * cfg.rotation_amount * progress
            } else {
                0.0
            };
            let blur = if cfg.blur_amount != 0.0 && i < top_index {
                ((top_index - i) as f64 * cfg.blur_amount).max(0.0)
            } else {
                0.0
            };

            let pin_start = trigger_start;
            let translate_y = if sample.offset >= pin_start && sample.offset <= pin_end {
                // Pinned: hold the item at its trigger position by exactly
                // the amount scrolled past it.
                sample.offset - item_top + stack_offset + stagger
            } else if sample.offset > pin_end {
                // Parked: frozen at the value reached at pin_end.
                pin_end - item_top + stack_offset + stagger
            } else {
                0.0
            };

            let next = TransformSnapshot::rounded(translate_y, scale, rotation, blur);
            let record = &mut self.items[i];
            if record.last.map_or(true, |prev| next.differs_from(&prev)) {
                record.last = Some(next);
                updates.push(ItemUpdate {
                    index: i,
                    transform: next,
                });
            }

            if i + 1 == n {
                let in_window = sample.offset >= pin_start && sample.offset <= pin_end;
                if in_window && !self.complete {
                    self.complete = true;
                    edge = Some(CompletionEdge::Entered);
                } else if !in_window && self.complete {
                    self.complete = false;
                    edge = Some(CompletionEdge::Exited);
                }
            }
        }
        edge
    }

    /// Drop all snapshot records. Subsequent passes re-emit every item.
    pub fn reset(&mut self) {
        for record in &mut self.items {
            record.last = None;
        }
        self.complete = false;
    }
}

/// Linear progress of `offset` through `[start, end]`, clamped to [0, 1].
#[inline]
fn progress_between(offset: f64, start: f64, end: f64) -> f64 {
    if offset < start {
        0.0
    } else if offset >= end {
        1.0
    } else {
        (offset - start) / (end - start)
    }
}
