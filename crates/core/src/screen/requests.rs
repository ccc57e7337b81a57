/// Correlates asynchronous requests of one family with their completions.
///
/// Every issued request gets a fresh id. Only a completion carrying the most
/// recent id is accepted; anything older was superseded and is dropped.
#[derive(Debug, Default)]
pub(crate) struct RequestTracker {
	next_id: u64,
	current_id: Option<u64>,
	in_flight: bool,
}

impl RequestTracker {
	pub(crate) fn issue(&mut self) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		let id = self.next_id;
		self.current_id = Some(id);
		self.in_flight = true;
		id
	}

	pub(crate) fn matches_latest(&self, id: u64) -> bool {
		Some(id) == self.current_id
	}

	/// Record a completion. Returns `false` when the completion is stale.
	pub(crate) fn complete(&mut self, id: u64) -> bool {
		if !self.in_flight || !self.matches_latest(id) {
			return false;
		}
		self.in_flight = false;
		true
	}

	/// Forget the current request so its completion is discarded.
	pub(crate) fn invalidate(&mut self) {
		self.current_id = None;
		self.in_flight = false;
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn has_issued(&self) -> bool {
		self.next_id > 0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_latest_completion_is_accepted() {
		let mut tracker = RequestTracker::default();
		let first = tracker.issue();
		let second = tracker.issue();
		assert!(!tracker.complete(first));
		assert!(tracker.is_in_flight());
		assert!(tracker.complete(second));
		assert!(!tracker.is_in_flight());
	}

	#[test]
	fn duplicate_completion_is_rejected() {
		let mut tracker = RequestTracker::default();
		let id = tracker.issue();
		assert!(tracker.complete(id));
		assert!(!tracker.complete(id));
	}

	#[test]
	fn invalidated_request_is_dropped() {
		let mut tracker = RequestTracker::default();
		let id = tracker.issue();
		tracker.invalidate();
		assert!(!tracker.complete(id));
		assert!(tracker.has_issued());
	}
}
