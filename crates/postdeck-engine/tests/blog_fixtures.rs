use postdeck_engine::{Deck, PostLink, Slide, io};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn blog_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/blog")
}

#[test]
fn loads_valid_posts_newest_first() {
    let index = io::load_posts(&blog_dir()).unwrap();

    let slugs: Vec<_> = index.posts().iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["busan-summer", "kyoto", "first-post"]);
}

#[test]
fn kyoto_deck_has_title_sections_and_footer() {
    let index = io::load_posts(&blog_dir()).unwrap();
    let at = index.find("kyoto").unwrap();
    let deck = Deck::from_index(&index, at).unwrap();

    // title + intro + two pairs + footer
    assert_eq!(deck.len(), 5);
    assert_eq!(
        deck.slides()[0],
        Slide::Title {
            title: "Spring in Kyoto".into(),
            date: "4/2/2024".into(),
            thumbnail: Some("img/kyoto-thumb.jpg".into()),
            song: Some("https://youtu.be/dQw4w9WgXcQ".into()),
        }
    );
    assert_eq!(
        deck.slides()[4],
        Slide::Footer {
            older: Some(PostLink {
                slug: "first-post".into(),
                title: "Hello".into(),
            }),
            newer: Some(PostLink {
                slug: "busan-summer".into(),
                title: "Busan by the sea".into(),
            }),
        }
    );
}

#[test]
fn newest_post_has_no_newer_link() {
    let index = io::load_posts(&blog_dir()).unwrap();
    let deck = Deck::from_index(&index, 0).unwrap();

    match deck.slides().last() {
        Some(Slide::Footer { newer, older }) => {
            assert!(newer.is_none());
            assert_eq!(older.as_ref().map(PostLink::route).as_deref(), Some("/posts/kyoto"));
        }
        other => panic!("expected footer, got {other:?}"),
    }
}

#[test]
fn unknown_slug_is_not_found() {
    let index = io::load_posts(&blog_dir()).unwrap();
    assert!(index.find("no-such-post").is_none());
}
