pub mod articles_seed;
