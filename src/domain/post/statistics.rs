// src/domain/post/statistics.rs
//! Summary statistics over an in-memory post collection.
//!
//! Every function is total: an empty slice yields zero or `None`. Ties are
//! resolved in favour of whatever was seen first in a left-to-right scan.
//! Like sums saturate at `i64::MAX`.
use crate::domain::post::entity::Post;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorPostCount {
    pub author: String,
    pub posts: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorLikeCount {
    pub author: String,
    pub likes: i64,
}

pub fn total_likes(posts: &[Post]) -> i64 {
    posts
        .iter()
        .fold(0_i64, |total, post| total.saturating_add(post.likes.get()))
}

pub fn favorite_post(posts: &[Post]) -> Option<&Post> {
    posts.iter().fold(None, |best: Option<&Post>, post| match best {
        Some(current) if current.likes >= post.likes => Some(current),
        _ => Some(post),
    })
}

pub fn author_with_most_posts(posts: &[Post]) -> Option<AuthorPostCount> {
    let totals = group_by_author(posts, |_| 1_u64, u64::saturating_add);
    pick_max(totals).map(|(author, posts)| AuthorPostCount { author, posts })
}

pub fn author_with_most_likes(posts: &[Post]) -> Option<AuthorLikeCount> {
    let totals = group_by_author(posts, |post| post.likes.get(), i64::saturating_add);
    pick_max(totals).map(|(author, likes)| AuthorLikeCount { author, likes })
}

/// Combines `value` per author, keeping authors in first-seen order.
fn group_by_author<V: Copy>(
    posts: &[Post],
    value: impl Fn(&Post) -> V,
    combine: impl Fn(V, V) -> V,
) -> Vec<(String, V)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(String, V)> = Vec::new();

    for post in posts {
        let amount = value(post);
        match index.get(post.author.as_str()) {
            Some(&slot) => totals[slot].1 = combine(totals[slot].1, amount),
            None => {
                index.insert(post.author.as_str(), totals.len());
                totals.push((post.author.as_str().to_owned(), amount));
            }
        }
    }

    totals
}

fn pick_max<V: PartialOrd>(totals: Vec<(String, V)>) -> Option<(String, V)> {
    totals.into_iter().fold(None, |best, candidate| match best {
        Some(current) if current.1 >= candidate.1 => Some(current),
        _ => Some(candidate),
    })
}
