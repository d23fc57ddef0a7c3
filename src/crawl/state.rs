// src/crawl/state.rs
// =============================================================================
// The bookkeeping of a breadth-first crawl.
//
// Three sets and a counter:
// - visited:       every URL we fetched (or tried to), never shrinks
// - frontier:      the URLs being fetched in the current round
// - next_frontier: the URLs discovered during the current round
// - depth:         which round we are in (the seed is round 0)
//
// Only the round transitions are exposed, so the sets can't drift apart.
// =============================================================================

use std::collections::HashSet;
use std::mem;

#[derive(Debug)]
pub struct CrawlState {
    visited: HashSet<String>,
    frontier: HashSet<String>,
    next_frontier: HashSet<String>,
    depth: usize,
    started: bool,
}

impl CrawlState {
    pub fn new(seed: &str) -> Self {
        Self {
            visited: HashSet::new(),
            frontier: HashSet::new(),
            next_frontier: HashSet::from([seed.to_string()]),
            depth: 0,
            started: false,
        }
    }

    // Moves to the next round and returns the URLs to fetch in it
    //
    // The discovered set becomes the frontier. Every frontier URL that was
    // not visited before is marked visited and returned; the rest are skipped.
    pub fn begin_round(&mut self) -> Vec<String> {
        if self.started {
            self.depth += 1;
        }
        self.started = true;

        self.frontier = mem::take(&mut self.next_frontier);

        let mut batch = Vec::with_capacity(self.frontier.len());
        for url in &self.frontier {
            if self.visited.insert(url.clone()) {
                batch.push(url.clone());
            }
        }
        batch
    }

    // Adds links found on a page of the current round
    pub fn discover<I>(&mut self, links: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.next_frontier.extend(links);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    // Ends the crawl: returns the visited set and the discovered URLs that
    // were never fetched
    pub fn finish(self) -> (HashSet<String>, HashSet<String>) {
        let visited = self.visited;
        let unexplored = self
            .next_frontier
            .into_iter()
            .filter(|url| !visited.contains(url))
            .collect();
        (visited, unexplored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_round_is_the_seed() {
        let mut state = CrawlState::new("https://ex.com/");
        assert_eq!(state.begin_round(), vec!["https://ex.com/"]);
        assert_eq!(state.depth(), 0);
        assert_eq!(state.finish().0, set(&["https://ex.com/"]));
    }

    #[test]
    fn test_rediscovered_urls_are_not_returned_again() {
        let mut state = CrawlState::new("https://ex.com/");
        state.begin_round();
        state.discover(["https://ex.com/".to_string(), "https://ex.com/a".to_string()]);

        let batch = state.begin_round();
        assert_eq!(batch, vec!["https://ex.com/a"]);
        assert_eq!(state.depth(), 1);
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut state = CrawlState::new("https://ex.com/");
        state.begin_round();
        state.discover(["https://ex.com/a".to_string(), "https://ex.com/a".to_string()]);
        state.discover(["https://ex.com/a".to_string()]);

        assert_eq!(state.begin_round().len(), 1);
    }

    #[test]
    fn test_finish_splits_visited_and_unexplored() {
        let mut state = CrawlState::new("https://ex.com/");
        state.begin_round();
        state.discover(["https://ex.com/".to_string(), "https://ex.com/a".to_string()]);

        let (visited, unexplored) = state.finish();
        assert_eq!(visited, set(&["https://ex.com/"]));
        assert_eq!(unexplored, set(&["https://ex.com/a"]));
    }

    #[test]
    fn test_empty_round_after_exhaustion() {
        let mut state = CrawlState::new("https://ex.com/");
        state.begin_round();
        assert!(state.begin_round().is_empty());
        assert_eq!(state.depth(), 1);
    }
}
