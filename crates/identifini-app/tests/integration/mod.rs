mod cards;
mod helpers;
