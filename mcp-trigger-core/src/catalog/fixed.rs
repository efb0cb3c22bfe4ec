use async_trait::async_trait;

use crate::catalog::EndpointCatalog;
use crate::error::CatalogError;
use crate::types::EndpointDescriptor;

const BUILTIN_TOOLS: &[&str] = &[
    "Busca_cargorias_dos_Produtos",
    "Cria_salva_os_itens_do_pedidodo_Delivery_Mesa_Bacao",
    "Cria_pedido_do_Delivery_Mesa_Bacao",
    "Busca-De_Produto_no_carddapio",
    "Salva_dados_do_cliente",
    "Consulta_restaurante",
];

/// In-memory catalog. Stands in for a live registry query.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    descriptors: Vec<EndpointDescriptor>,
}

impl StaticCatalog {
    pub fn new(descriptors: Vec<EndpointDescriptor>) -> Self {
        Self { descriptors }
    }

    /// The tools shipped with the connector.
    pub fn builtin() -> Self {
        Self {
            descriptors: BUILTIN_TOOLS
                .iter()
                .map(|name| EndpointDescriptor {
                    name: (*name).to_string(),
                })
                .collect(),
        }
    }

    pub fn from_names<I, S>(names: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let descriptors = names
            .into_iter()
            .map(EndpointDescriptor::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { descriptors })
    }
}

#[async_trait]
impl EndpointCatalog for StaticCatalog {
    async fn list_descriptors(&self) -> Result<Vec<EndpointDescriptor>, CatalogError> {
        Ok(self.descriptors.clone())
    }
}
