mod layout;
pub use layout::Shell;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod products;
pub use products::Products;

mod new_product;
pub use new_product::NewProduct;

mod edit_product;
pub use edit_product::EditProduct;

mod favorites;
pub use favorites::Favorites;

mod edit_profile;
pub use edit_profile::EditProfile;
