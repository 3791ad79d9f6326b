use crate::types::{MergedMarker, RunnableMarker};

/// Collapse markers that share an anchor line into one gutter entry each.
///
/// Output order follows the first marker seen on each line. A slot that
/// collects two different runnable names gets the generic label instead of
/// either name.
pub fn merge_markers(markers: &[RunnableMarker]) -> Vec<MergedMarker> {
    // first marker of each slot, parallel to `merged`
    let mut anchors: Vec<&RunnableMarker> = Vec::new();
    let mut merged: Vec<MergedMarker> = Vec::new();

    for marker in markers {
        match anchors.iter().position(|anchor| anchor.can_merge_with(marker)) {
            Some(slot) => merged[slot].absorb(marker),
            None => {
                anchors.push(marker);
                merged.push(MergedMarker::from_marker(marker));
            }
        }
    }

    merged
}
