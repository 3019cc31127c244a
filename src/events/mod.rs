//! Event notification for presentation layers.
//!
//! The engine never knows whether a GUI, a CLI or nothing at all is
//! listening. It records a [`GameEvent`] for each observable change and hands
//! it to every [`GameObserver`] subscribed through the [`ObserverRegistry`].
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use real_estate_game::events::GameEvent;
//! use real_estate_game::rules::RealEstateGame;
//!
//! let mut game = RealEstateGame::new();
//! game.create_spaces(200, &[50; 24]).unwrap();
//!
//! let purchases = Rc::new(RefCell::new(0));
//! let counter = Rc::clone(&purchases);
//! game.subscribe(Box::new(move |event: &GameEvent| {
//!     if let GameEvent::SpacePurchased { .. } = event {
//!         *counter.borrow_mut() += 1;
//!     }
//! }));
//!
//! game.create_player("A", 1000);
//! game.move_player("A", 1).unwrap();
//! assert!(game.buy_space("A").unwrap());
//! assert_eq!(*purchases.borrow(), 1);
//! ```

mod event;
mod observer;

pub use event::GameEvent;
pub use observer::{GameObserver, ObserverId, ObserverRegistry};
