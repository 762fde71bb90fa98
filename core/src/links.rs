use serde::Serialize;

const SPOTIFY_SEARCH: &str = "https://open.spotify.com/search/";
const APPLE_MUSIC_SEARCH: &str = "https://music.apple.com/us/search?term=";

/// Outbound music-search URLs for one song. Nothing checks that they resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchLinks {
    pub spotify: String,
    pub apple: String,
}

// Marks `encodeURIComponent` leaves unescaped.
const UNRESERVED_MARKS: [(&str, &str); 5] =
    [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")];

fn encode_component(text: &str) -> String {
    UNRESERVED_MARKS
        .iter()
        .fold(urlencoding::encode(text).into_owned(), |query, (escaped, mark)| {
            query.replace(escaped, mark)
        })
}

pub fn generate_search_links(title: &str, artist: &str) -> SearchLinks {
    let query = encode_component(&format!("{title} {artist}"));
    SearchLinks {
        spotify: format!("{SPOTIFY_SEARCH}{query}"),
        apple: format!("{APPLE_MUSIC_SEARCH}{query}"),
    }
}
