use crate::error::{Error, Result};
use crate::mailbox::Mailbox;

/// A routed message that could not be enqueued on its target
#[derive(Debug)]
pub struct DeadLetter<M> {
    pub target: usize,
    pub message: M,
}

/// Round-robin router over a fixed roster of worker mailboxes
///
/// The n-th routed message (0-indexed) goes to `roster[n % roster.len()]`.
/// The cursor advances on every dispatch, delivered or not.
pub struct RoundRobinRouter<W> {
    roster: Vec<W>,
    dispatched: usize,
}

impl<W> RoundRobinRouter<W> {
    pub fn new(roster: Vec<W>) -> Result<Self> {
        if roster.is_empty() {
            return Err(Error::InvalidConfig(
                "router needs at least one worker".to_string(),
            ));
        }
        Ok(Self {
            roster,
            dispatched: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Number of messages routed so far
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Roster index that the given dispatch index is routed to
    pub fn target_for(&self, dispatch_index: usize) -> usize {
        dispatch_index % self.roster.len()
    }

    /// Send `msg` to the next worker in cyclic order
    /// Returns the roster index it was routed to
    pub fn route<M>(&mut self, msg: M) -> std::result::Result<usize, DeadLetter<M>>
    where
        W: Mailbox<M>,
    {
        let target = self.target_for(self.dispatched);
        self.dispatched += 1;
        self.roster[target]
            .tell(msg)
            .map(|()| target)
            .map_err(|undelivered| DeadLetter {
                target,
                message: undelivered.into_inner(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingMailbox;

    fn roster(size: usize) -> Vec<RecordingMailbox<usize>> {
        (0..size).map(|_| RecordingMailbox::new()).collect()
    }

    #[test]
    fn test_routes_cyclically_over_three_workers() {
        let workers = roster(3);
        let mut router = RoundRobinRouter::new(workers.clone()).unwrap();

        let targets: Vec<usize> = (0..5).map(|n| router.route(n).unwrap()).collect();

        assert_eq!(targets, vec![0, 1, 2, 0, 1]);
        assert_eq!(workers[0].take(), vec![0, 3]);
        assert_eq!(workers[1].take(), vec![1, 4]);
        assert_eq!(workers[2].take(), vec![2]);
    }

    #[test]
    fn test_target_is_dispatch_index_mod_roster_size() {
        for size in 1..=7 {
            let router = RoundRobinRouter::new(roster(size)).unwrap();
            for n in 0..50 {
                assert_eq!(router.target_for(n), n % size);
            }
        }
    }

    #[test]
    fn test_single_worker_receives_everything() {
        let workers = roster(1);
        let mut router = RoundRobinRouter::new(workers.clone()).unwrap();
        for n in 0..4 {
            assert_eq!(router.route(n).unwrap(), 0);
        }
        assert_eq!(workers[0].len(), 4);
    }

    #[test]
    fn test_dead_worker_still_advances_cursor() {
        let live = RecordingMailbox::new();
        let workers = vec![live.clone(), RecordingMailbox::closed(), live.clone()];
        let mut router = RoundRobinRouter::new(workers).unwrap();

        assert_eq!(router.route(10).unwrap(), 0);
        let dead = router.route(11).unwrap_err();
        assert_eq!(dead.target, 1);
        assert_eq!(dead.message, 11);
        assert_eq!(router.route(12).unwrap(), 2);
        assert_eq!(router.dispatched(), 3);
        assert_eq!(live.take(), vec![10, 12]);
    }

    #[test]
    fn test_empty_roster_is_rejected() {
        let result = RoundRobinRouter::<RecordingMailbox<usize>>::new(Vec::new());
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
