use std::cmp::Ordering;

use super::word::Word;

/// Total order used to rank successors, best first.
///
/// - Higher probability ranks first.
/// - Equal probabilities rank by ascending token.
///
/// `Ordering::Less` means `a` ranks before `b`. Unfinalized words rank as
/// probability 0.
pub fn rank_order(a: &Word, b: &Word) -> Ordering {
	let pa = a.probability().unwrap_or(0.0);
	let pb = b.probability().unwrap_or(0.0);
	pb.total_cmp(&pa).then_with(|| a.token().cmp(b.token()))
}

/// Heap adapter over [`rank_order`]: the best-ranked word is the greatest.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ranked<'a>(pub(crate) &'a Word);

impl Ord for Ranked<'_> {
	fn cmp(&self, other: &Self) -> Ordering {
		rank_order(other.0, self.0)
	}
}

impl PartialOrd for Ranked<'_> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for Ranked<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Ranked<'_> {}
