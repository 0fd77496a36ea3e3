mod helpers;
mod register;
mod concurrency;
