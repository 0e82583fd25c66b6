/// Customers with a configured greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Customer {
    A,
    B,
    C,
}

impl Customer {
    /// 精确匹配客户代码，不做大小写转换或去除空白
    pub fn parse(s: &str) -> Result<Customer, UnknownCustomer> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            _ => Err(UnknownCustomer(s.into())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Customer::A => "A",
            Customer::B => "B",
            Customer::C => "C",
        }
    }

    pub fn greeting(&self) -> &'static str {
        match self {
            Customer::A => "Hi!",
            Customer::B => "Dear Sir or Madam!",
            Customer::C => "Moin!",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("`{0}` is not a known customer.")]
pub struct UnknownCustomer(String);

impl UnknownCustomer {
    pub fn name(&self) -> &str {
        &self.0
    }
}
