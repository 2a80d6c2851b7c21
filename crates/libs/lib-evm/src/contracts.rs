//! # Contract Bindings
//!
//! `alloy::sol!` bindings for the deployed contracts. Only the functions the
//! dashboard reads or writes are declared.
//!
//! | Binding | Contract |
//! |---|---|
//! | [`IXTime`] | xTIME token (mint/redeem, price, fees, protocol info) |
//! | [`IERC20`] | TIME backing token and any other ERC-20 balance/allowance |
//! | [`IPulseXRouter`] | PulseX router (quotes and swaps) |
//! | [`ILiquidityLocker`] | liquidity lock (`boost`) |
//! | [`IArbitrage`] | arbitrage helper (`getBestMove`, `fing`, `fong`) |

use alloy::sol;

sol! {
    #[sol(rpc)]
    contract IXTime {
        function balanceOf(address account) external view returns (uint256);
        function allowance(address holder, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function calculatePrice() external view returns (uint256);
        function getInfo() external view returns (uint256 users, uint256 txs, uint256 underlyingSupply, uint256 supply, uint256 price);
        function mintFee() external view returns (uint256);
        function sellFee() external view returns (uint256);
        function estimateMinted(uint256 numTokens) external view returns (uint256);
        function estimateRedeemed(uint256 numTokens) external view returns (uint256);
        function getValueOfHoldings(address holder) external view returns (uint256);
        function mintWithBacking(uint256 numTokens, address recipient) external returns (uint256);
        function redeem(uint256 tokenAmount) external returns (uint256);
    }
}

sol! {
    #[sol(rpc)]
    contract IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

sol! {
    #[sol(rpc)]
    contract IPulseXRouter {
        function getAmountsOut(uint256 amountIn, address[] calldata path) external view returns (uint256[] memory amounts);
        function swapExactETHForTokens(uint256 amountOutMin, address[] calldata path, address to, uint256 deadline) external payable returns (uint256[] memory amounts);
        function swapExactTokensForETH(uint256 amountIn, uint256 amountOutMin, address[] calldata path, address to, uint256 deadline) external returns (uint256[] memory amounts);
    }
}

sol! {
    #[sol(rpc)]
    contract ILiquidityLocker {
        function boost() external;
    }
}

sol! {
    #[sol(rpc)]
    contract IArbitrage {
        struct Response {
            string title;
            string description;
            string functionId;
        }

        function getBestMove() external view returns (Response memory response);
        function paused() external view returns (bool);
        function fing(uint256 minProfitBps) external payable returns (bool success);
        function fong(uint256 minProfitBps) external payable returns (bool success);
    }
}
