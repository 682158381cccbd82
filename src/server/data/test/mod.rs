mod booking;
mod business;
mod catalog;
mod payment;
