use futures::future::try_join_all;
use log::{info, trace};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{RngCore, SeedableRng};

use crate::error::{GameError, Result};
use crate::model::{Board, Category, Clue, NUM_CATEGORIES, NUM_CLUES};
use crate::source::{CategoryId, DataSource};

/// Size of the candidate pool requested from the source. Mirrors the
/// upstream listing endpoint's `count` parameter.
pub const DEFAULT_POOL_SIZE: usize = 100;

/// Assembles a fresh board by sampling the source: `NUM_CATEGORIES`
/// categories out of the candidate pool, then `NUM_CLUES` clues out of each
/// category's pool, both without replacement. Seedable for reproducible
/// boards.
pub struct BoardBuilder<S: DataSource> {
    source: S,
    pub pool_size: usize,
    rng: StdRng,
    seed: u64,
}

impl<S: DataSource> BoardBuilder<S> {
    pub fn new(source: S) -> Self {
        Self::with_seed(source, None)
    }

    pub fn with_seed(source: S, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
        Self {
            source,
            pool_size: DEFAULT_POOL_SIZE,
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Builds a complete board or nothing: every fetch must succeed and
    /// every pool must be large enough, otherwise the error propagates and
    /// no board is produced. Selections are independent across invocations
    /// but never repeat within one.
    pub async fn build_board(&mut self) -> Result<Board> {
        let candidate_ids = self.source.list_category_ids(self.pool_size).await?;
        if candidate_ids.len() < NUM_CATEGORIES {
            return Err(GameError::InsufficientData {
                needed: NUM_CATEGORIES,
                available: candidate_ids.len(),
            });
        }

        let selected: Vec<CategoryId> =
            index::sample(&mut self.rng, candidate_ids.len(), NUM_CATEGORIES)
                .iter()
                .map(|i| candidate_ids[i])
                .collect();
        trace!(target: "board_builder", "selected category ids: {:?} (seed {})", selected, self.seed);

        // all fetches in flight at once; one failure fails the whole build
        let source = &self.source;
        let fetched = try_join_all(selected.iter().map(|&id| source.fetch_category(id))).await?;

        let mut categories = Vec::with_capacity(NUM_CATEGORIES);
        for data in fetched {
            if data.clues.len() < NUM_CLUES {
                return Err(GameError::InsufficientData {
                    needed: NUM_CLUES,
                    available: data.clues.len(),
                });
            }
            let clues: Vec<Clue> = index::sample(&mut self.rng, data.clues.len(), NUM_CLUES)
                .iter()
                .map(|i| {
                    let pick = &data.clues[i];
                    Clue::new(pick.question.clone(), pick.answer.clone())
                })
                .collect();
            categories.push(Category::new(data.title, clues));
        }

        let board = Board::new(categories);
        info!(
            target: "board_builder",
            "assembled board {} with categories {:?}",
            board.game_id,
            board.titles()
        );
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use itertools::Itertools;

    use super::*;
    use crate::model::RevealState;
    use crate::source::{CategoryData, CluePayload};

    /// Configurable in-memory source: `n_categories` categories of
    /// `n_clues` clues each, all pairwise distinct.
    struct StubSource {
        n_categories: usize,
        n_clues: usize,
        unavailable: bool,
    }

    impl StubSource {
        fn new(n_categories: usize, n_clues: usize) -> Self {
            Self {
                n_categories,
                n_clues,
                unavailable: false,
            }
        }
    }

    impl DataSource for StubSource {
        async fn list_category_ids(&self, pool_size: usize) -> Result<Vec<CategoryId>> {
            if self.unavailable {
                return Err(GameError::SourceUnavailable("stub offline".to_string()));
            }
            Ok((0..self.n_categories as CategoryId).take(pool_size).collect())
        }

        async fn fetch_category(&self, id: CategoryId) -> Result<CategoryData> {
            if id >= self.n_categories as CategoryId {
                return Err(GameError::NotFound(id));
            }
            Ok(CategoryData {
                title: format!("Category {}", id),
                clues: (0..self.n_clues)
                    .map(|q| CluePayload {
                        question: format!("question {}-{}", id, q),
                        answer: format!("answer {}-{}", id, q),
                    })
                    .collect(),
            })
        }
    }

    #[test]
    fn test_build_board_shape_and_initial_state() {
        let mut builder = BoardBuilder::new(StubSource::new(20, 8));
        let board = block_on(builder.build_board()).unwrap();

        assert_eq!(board.categories.len(), NUM_CATEGORIES);
        for category in &board.categories {
            assert_eq!(category.clues.len(), NUM_CLUES);
            for clue in &category.clues {
                assert_eq!(clue.showing, RevealState::Hidden);
            }
        }
    }

    #[test]
    fn test_build_board_selections_are_distinct() {
        let mut builder = BoardBuilder::new(StubSource::new(20, 8));
        let board = block_on(builder.build_board()).unwrap();

        assert!(board.titles().iter().all_unique());
        for category in &board.categories {
            assert!(category.clues.iter().map(|c| &c.question).all_unique());
        }
    }

    #[test]
    fn test_build_board_exact_minimum_pool() {
        // exactly 6 categories of exactly 5 clues still builds
        let mut builder = BoardBuilder::new(StubSource::new(6, 5));
        let board = block_on(builder.build_board()).unwrap();
        assert_eq!(board.categories.len(), NUM_CATEGORIES);
    }

    #[test]
    fn test_seeded_builds_are_reproducible() {
        let mut a = BoardBuilder::with_seed(StubSource::new(20, 8), Some(42));
        let mut b = BoardBuilder::with_seed(StubSource::new(20, 8), Some(42));

        let board_a = block_on(a.build_board()).unwrap();
        let board_b = block_on(b.build_board()).unwrap();
        assert_eq!(board_a.categories, board_b.categories);
    }

    #[test]
    fn test_short_clue_pool_fails_insufficient_data() {
        let mut builder = BoardBuilder::new(StubSource::new(10, 3));
        assert_eq!(
            block_on(builder.build_board()),
            Err(GameError::InsufficientData {
                needed: NUM_CLUES,
                available: 3,
            })
        );
    }

    #[test]
    fn test_short_category_list_fails_insufficient_data() {
        let mut builder = BoardBuilder::new(StubSource::new(4, 8));
        assert_eq!(
            block_on(builder.build_board()),
            Err(GameError::InsufficientData {
                needed: NUM_CATEGORIES,
                available: 4,
            })
        );
    }

    #[test]
    fn test_source_failure_propagates() {
        let mut stub = StubSource::new(20, 8);
        stub.unavailable = true;
        let mut builder = BoardBuilder::new(stub);
        assert_eq!(
            block_on(builder.build_board()),
            Err(GameError::SourceUnavailable("stub offline".to_string()))
        );
    }

    #[test]
    fn test_pool_size_is_forwarded() {
        // listing honors the configured pool bound, so a pool smaller than
        // the board cannot sneak through
        let mut builder = BoardBuilder::new(StubSource::new(20, 8));
        builder.pool_size = 4;
        assert_eq!(
            block_on(builder.build_board()),
            Err(GameError::InsufficientData {
                needed: NUM_CATEGORIES,
                available: 4,
            })
        );
    }
}
