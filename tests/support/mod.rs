pub mod asrdash_env;
