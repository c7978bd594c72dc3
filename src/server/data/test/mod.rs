mod cart;
mod product;
mod user;
mod user_token;
