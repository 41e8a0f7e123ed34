mod home;
pub use home::HomeView;

mod categorias;
pub use categorias::CategoriasView;

mod usuarios;
pub use usuarios::UsuariosView;

mod transacoes;
pub use transacoes::TransacoesView;

mod relatorios;
pub use relatorios::{Relatorio, RelatoriosView};

mod not_found;
pub use not_found::NotFoundView;
