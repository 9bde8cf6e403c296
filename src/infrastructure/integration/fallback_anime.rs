//! Curated anime used when the catalog cannot be reached.

use std::collections::HashMap;
use std::sync::LazyLock;

use uuid::{Uuid, uuid};

use crate::domain::entities::Anime;

static FALLBACK_ANIME: LazyLock<HashMap<Uuid, Anime>> = LazyLock::new(|| {
    [
        Anime::new(
            uuid!("550e8400-e29b-41d4-a716-446655440000"),
            "Fullmetal Alchemist: Brotherhood",
            9.1,
            2009,
            "Hiromu Arakawa",
        ),
        Anime::new(
            uuid!("74723c34-d020-4f51-93e1-7505877840a1"),
            "Steins;Gate",
            9.0,
            2011,
            "Chiyomaru Shikura",
        ),
        Anime::new(
            uuid!("9b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d"),
            "Attack on Titan",
            8.5,
            2013,
            "Hajime Isayama",
        ),
        Anime::new(
            uuid!("10ba038e-48da-487b-96e8-8d3b99b6d18a"),
            "Spirited Away",
            8.6,
            2001,
            "Hayao Miyazaki",
        ),
        Anime::new(
            uuid!("6ec0bd7f-11c0-43da-975e-2a8ad9ebae0b"),
            "Cowboy Bebop",
            8.7,
            1998,
            "Shinichirō Watanabe",
        ),
        Anime::new(
            uuid!("f47ac10b-58cc-4372-a567-0e02b2c3d479"),
            "Death Note",
            8.6,
            2006,
            "Tsugumi Ohba",
        ),
        Anime::new(
            uuid!("adca0095-2d93-4781-9b7e-972109e25867"),
            "Hunter x Hunter",
            9.0,
            2011,
            "Yoshihiro Togashi",
        ),
        Anime::new(
            uuid!("8b3d692a-b7e1-48e0-84eb-489e2730623d"),
            "One Piece",
            8.7,
            1999,
            "Eiichiro Oda",
        ),
    ]
    .into_iter()
    .map(|anime| (anime.id, anime))
    .collect()
});

/// Looks up an anime in the fallback table.
pub fn fallback_anime(anime_id: Uuid) -> Option<Anime> {
    FALLBACK_ANIME.get(&anime_id).cloned()
}
