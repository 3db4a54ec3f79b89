mod helpers;
mod mocks;
mod origin;
mod pages;
