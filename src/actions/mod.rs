pub mod search_artist;
