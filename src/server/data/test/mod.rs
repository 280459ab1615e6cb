mod category;
mod comment;
mod review;
mod user;
