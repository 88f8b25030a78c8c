use anyhow::Result;
use crossterm::event::KeyCode;
use postdeck_config::DeckConfig;
use postdeck_engine::{Deck, PostIndex, io};
use ratatui::widgets::ListState;
use std::path::PathBuf;

/// Full-resolution viewer opened from a title or image slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageViewer {
    pub src: String,
}

/// A post opened as a deck.
pub struct OpenPost {
    pub index: usize,
    pub deck: Deck,
    pub viewer: Option<ImageViewer>,
}

pub enum Screen {
    List,
    Post(OpenPost),
    NotFound(String),
}

pub struct App {
    pub posts_path: PathBuf,
    pub posts: PostIndex,
    pub deck_config: DeckConfig,
    pub list_state: ListState,
    pub screen: Screen,
}

impl App {
    pub fn new(posts_path: PathBuf, deck_config: DeckConfig) -> Result<Self> {
        let posts = io::load_posts(&posts_path)?;
        log::info!("Loaded {} posts from {}", posts.len(), posts_path.display());
        Ok(Self::with_posts(posts_path, posts, deck_config))
    }

    pub fn with_posts(posts_path: PathBuf, posts: PostIndex, deck_config: DeckConfig) -> Self {
        let mut list_state = ListState::default();
        if !posts.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            posts_path,
            posts,
            deck_config,
            list_state,
            screen: Screen::List,
        }
    }

    pub fn next_post(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.posts.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous_post(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.posts.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn open_selected(&mut self) {
        if let Some(index) = self.list_state.selected() {
            self.open_index(index);
        }
    }

    pub fn open_slug(&mut self, slug: &str) {
        match self.posts.find(slug) {
            Some(index) => self.open_index(index),
            None => {
                log::warn!("No post with slug `{slug}`");
                self.screen = Screen::NotFound(slug.to_string());
            }
        }
    }

    fn open_index(&mut self, index: usize) {
        if let Some(deck) = Deck::from_index(&self.posts, index) {
            log::debug!("Opening post #{index} with {} slides", deck.len());
            self.list_state.select(Some(index));
            self.screen = Screen::Post(OpenPost {
                index,
                deck,
                viewer: None,
            });
        }
    }

    pub fn back_to_list(&mut self) {
        self.screen = Screen::List;
    }

    /// Opens the next older post, if the open post has one.
    pub fn open_older(&mut self) {
        if let Some(index) = self.open_post().map(|open| open.index)
            && self.posts.older(index).is_some()
        {
            self.open_index(index + 1);
        }
    }

    /// Opens the next newer post, if the open post has one.
    pub fn open_newer(&mut self) {
        if let Some(index) = self.open_post().map(|open| open.index)
            && self.posts.newer(index).is_some()
        {
            self.open_index(index - 1);
        }
    }

    /// Handles one key press. Returns `false` when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if code == KeyCode::Char('q') {
            return false;
        }

        match &mut self.screen {
            Screen::List => match code {
                KeyCode::Down | KeyCode::Char('j') => self.next_post(),
                KeyCode::Up | KeyCode::Char('k') => self.previous_post(),
                KeyCode::Enter | KeyCode::Char(' ') => self.open_selected(),
                _ => {}
            },
            Screen::NotFound(_) => {
                if matches!(code, KeyCode::Esc | KeyCode::Char('b') | KeyCode::Enter) {
                    self.back_to_list();
                }
            }
            Screen::Post(open) if open.viewer.is_some() => {
                // The viewer swallows navigation until it is closed
                if matches!(code, KeyCode::Esc | KeyCode::Enter) {
                    open.viewer = None;
                }
            }
            Screen::Post(open) => match code {
                KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
                    open.deck.next();
                }
                KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
                    open.deck.previous();
                }
                KeyCode::Home => {
                    open.deck.first();
                }
                KeyCode::End => {
                    open.deck.end();
                }
                KeyCode::Enter => {
                    open.viewer = open
                        .deck
                        .active_slide()
                        .viewer_src()
                        .map(|src| ImageViewer { src: src.to_string() });
                }
                KeyCode::Char('o') => self.open_older(),
                KeyCode::Char('n') => self.open_newer(),
                KeyCode::Esc | KeyCode::Char('b') => self.back_to_list(),
                _ => {}
            },
        }

        true
    }

    pub fn open_post(&self) -> Option<&OpenPost> {
        match &self.screen {
            Screen::Post(open) => Some(open),
            _ => None,
        }
    }
}
