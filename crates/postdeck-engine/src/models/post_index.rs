use super::post::Post;

/// Orders posts newest first; ties fall back to slug so the order is stable.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
}

/// All posts of a blog, newest first, with neighbour lookup.
///
/// "Newer" is the previous entry and "older" the next one, matching the
/// footer arrows of a post.
#[derive(Debug, Clone, Default)]
pub struct PostIndex {
    posts: Vec<Post>,
}

impl PostIndex {
    pub fn new(mut posts: Vec<Post>) -> Self {
        sort_newest_first(&mut posts);
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    /// Position of the first post with `slug`.
    pub fn find(&self, slug: &str) -> Option<usize> {
        self.posts.iter().position(|p| p.slug == slug)
    }

    pub fn newer(&self, index: usize) -> Option<&Post> {
        if index >= self.posts.len() {
            return None;
        }
        index.checked_sub(1).and_then(|i| self.posts.get(i))
    }

    pub fn older(&self, index: usize) -> Option<&Post> {
        if index >= self.posts.len() {
            return None;
        }
        self.posts.get(index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn post(slug: &str, y: i32, m: u32, d: u32) -> Post {
        Post {
            slug: slug.into(),
            title: slug.to_uppercase(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            thumbnail: None,
            song: None,
            content: String::new(),
        }
    }

    fn index() -> PostIndex {
        PostIndex::new(vec![
            post("middle", 2024, 2, 1),
            post("oldest", 2023, 5, 9),
            post("newest", 2024, 6, 30),
        ])
    }

    fn slugs(index: &PostIndex) -> Vec<&str> {
        index.posts().iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn sorted_newest_first() {
        assert_eq!(slugs(&index()), vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn same_date_sorted_by_slug() {
        let index = PostIndex::new(vec![post("b", 2024, 1, 1), post("a", 2024, 1, 1)]);
        assert_eq!(slugs(&index), vec!["a", "b"]);
    }

    #[test]
    fn find_by_slug() {
        let index = index();
        assert_eq!(index.find("middle"), Some(1));
        assert_eq!(index.find("missing"), None);
    }

    #[test]
    fn neighbours_of_middle_post() {
        let index = index();
        assert_eq!(index.newer(1).map(|p| p.slug.as_str()), Some("newest"));
        assert_eq!(index.older(1).map(|p| p.slug.as_str()), Some("oldest"));
    }

    #[test]
    fn newest_has_no_newer_and_oldest_has_no_older() {
        let index = index();
        assert!(index.newer(0).is_none());
        assert!(index.older(2).is_none());
    }

    #[test]
    fn out_of_range_has_no_neighbours() {
        let index = index();
        assert!(index.older(3).is_none());
        assert!(index.older(usize::MAX).is_none());
        assert!(index.newer(3).is_none());
        assert!(index.get(3).is_none());
    }

    #[test]
    fn empty_index() {
        let index = PostIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.newer(0).is_none());
        assert!(index.older(0).is_none());
    }
}
