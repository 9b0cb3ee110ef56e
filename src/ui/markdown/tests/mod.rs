mod helpers;
mod links;
